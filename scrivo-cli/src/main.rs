// Command-line interface for scrivo
//
// This binary provides commands for composing and exporting scrivo document
// projects. A project is a JSON file holding an ordered sequence of text
// parts; the heavy lifting (outline numbering, dialect detection, rendering,
// export) lives in the scrivo-render crate. This crate is only the shell.
//
// Exporting:
//
// The export target can be auto-detected from the output file extension,
// while being overridable with an explicit --to flag.
// Usage:
//  scrivo <project.json> -o <file>                 - Export (target from extension)
//  scrivo export <project.json> --to <target> [-o <file>]  - Same, explicit
//  scrivo outline <project.json>                   - Print the numbered outline
//  scrivo new <project.json>                       - Scaffold a starter project
//  scrivo --list-exporters                         - List available export targets
//
// Extra Parameters:
//
// Exporter-specific parameters can be passed using --extra-<parameter-name>
// <value>. The CLI layer strips the "extra-" prefix and passes the
// parameters to the exporter.
// Example:
//  scrivo book.json --to html --extra-theme book -o book.html

use clap::{Arg, ArgAction, Command, ValueHint};
use scrivo_config::{Loader, ScrivoConfig};
use scrivo_render::publish::{publish, PublishArtifact, PublishSpec};
use scrivo_render::{ExporterRegistry, Part, Project};
use std::collections::HashMap;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("scrivo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for composing and exporting scrivo document projects")
        .long_about(
            "scrivo is a command-line tool for working with scrivo project files.\n\n\
            Commands:\n  \
            - export:  Render a project and write HTML or DOCX output\n  \
            - outline: Print the numbered outline of a project\n  \
            - new:     Scaffold a starter project file\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass exporter-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            scrivo book.json -o book.html           # Export (target from extension)\n  \
            scrivo book.json --to html              # Export to stdout\n  \
            scrivo export book.json --to docx -o book.docx\n  \
            scrivo outline book.json                # Show the numbered outline",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-exporters")
                .long("list-exporters")
                .help("List available export targets")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a scrivo.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Render a project and write an output document (default command)")
                .long_about(
                    "Render a project and write an output document.\n\n\
                    Supported targets:\n  \
                    - html: Self-contained HTML5 page with embedded CSS\n  \
                    - docx: Word document via an external pandoc converter\n\n\
                    The target is auto-detected from the output file extension.\n\
                    Text targets go to stdout by default; binary targets need -o.\n\n\
                    Examples:\n  \
                    scrivo export book.json --to html            # HTML to stdout\n  \
                    scrivo export book.json -o book.html         # Target from extension\n  \
                    scrivo export book.json -o book.docx         # DOCX via pandoc\n  \
                    scrivo book.json -o book.html                # 'export' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Project file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Export target (auto-detected from the output extension)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (text targets default to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("outline")
                .about("Print the numbered outline of a project")
                .long_about(
                    "Numbers the project's included parts and prints one line per\n\
                    part: outline number and title, indented by level. Parts whose\n\
                    numbers truncate (level jumps) print their title alone.",
                )
                .arg(
                    Arg::new("input")
                        .help("Project file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("new")
                .about("Scaffold a starter project file")
                .arg(
                    Arg::new("path")
                        .help("Path for the new project file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Project title (defaults to 'Untitled Project')")
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // If the first arg looks like a file rather than a subcommand,
            // inject "export" and try again.
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "export"
                && cleaned_args[1] != "outline"
                && cleaned_args[1] != "new"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "export".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-exporters") {
        handle_list_exporters_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_export_command(input, to, output, &extra_params, &config);
        }
        Some(("outline", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_outline_command(input, &config);
        }
        Some(("new", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let title = sub_matches
                .get_one::<String>("title")
                .map(|s| s.as_str())
                .unwrap_or("Untitled Project");
            handle_new_command(path, title);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &ScrivoConfig,
) {
    let registry = ExporterRegistry::default();

    // Resolve --to, falling back to the output file extension
    let target = match to {
        Some(t) => t.to_string(),
        None => match output.and_then(|o| registry.detect_exporter_from_filename(o)) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect export target");
                eprintln!("Specify --to explicitly or use an output path with a known extension");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = registry.get(&target) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let project = Project::load(input).unwrap_or_else(|e| {
        eprintln!("Error reading project '{input}': {e}");
        std::process::exit(1);
    });

    let options = exporter_options_from_config(&target, config, extra_params);

    let mut spec = PublishSpec::new(&project, &target);
    spec.options = options;
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => print!("{text}"),
            PublishArtifact::File(_) => {}
        },
        Err(e) => {
            eprintln!("Export error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the outline command
fn handle_outline_command(input: &str, config: &ScrivoConfig) {
    let mut project = Project::load(input).unwrap_or_else(|e| {
        eprintln!("Error reading project '{input}': {e}");
        std::process::exit(1);
    });

    project.prepare_with(&(&config.render).into());

    for part in project.included_parts() {
        let indent = "  ".repeat(part.level);
        if part.number.is_empty() {
            println!("{indent}{}", part.name);
        } else {
            println!("{indent}{} {}", part.number, part.name);
        }
    }
}

/// Handle the new command
fn handle_new_command(path: &str, title: &str) {
    if std::path::Path::new(path).exists() {
        eprintln!("Error: '{path}' already exists");
        std::process::exit(1);
    }

    let mut project = Project::new(title);
    project.parts = vec![
        Part::new(0, "Introduction", "Write the opening here.").with_id(1),
        Part::new(1, "Background", "## Context\n\nMarkdown works too.").with_id(2),
    ];

    project.save(path).unwrap_or_else(|e| {
        eprintln!("Error writing project '{path}': {e}");
        std::process::exit(1);
    });
    println!("Created {path}");
}

/// Handle the list-exporters command
fn handle_list_exporters_command() {
    println!("Available export targets:\n");
    let registry = ExporterRegistry::default();
    for name in registry.list_exporters() {
        match registry.get(&name) {
            Ok(exporter) => println!("  {name:<8}{}", exporter.description()),
            Err(_) => println!("  {name}"),
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ScrivoConfig {
    let loader = Loader::new().with_optional_file("scrivo.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Build the exporter option map: configuration first, --extra-* overrides
/// layered on top.
fn exporter_options_from_config(
    target: &str,
    config: &ScrivoConfig,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = HashMap::new();

    if !config.render.numbered_headings {
        options.insert("numbered-headings".to_string(), "false".to_string());
    }

    match target {
        "html" => {
            options.insert("theme".to_string(), config.export.html.theme.clone());
            if let Some(css_path) = &config.export.html.custom_css {
                options.insert("css-path".to_string(), css_path.clone());
            }
        }
        "docx" => {
            if let Some(converter) = &config.export.docx.converter {
                options.insert("converter".to_string(), converter.clone());
            }
            if let Some(reference) = &config.export.docx.reference_doc {
                options.insert("reference-doc".to_string(), reference.clone());
            }
        }
        _ => {}
    }

    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }

    options
}
