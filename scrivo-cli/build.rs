use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI defined in src/main.rs. Build scripts can't access
// src/ modules, so the command shape is duplicated here; only the pieces
// that matter for completions are kept.
fn build_cli() -> Command {
    Command::new("scrivo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for composing and exporting scrivo document projects")
        .arg(
            Arg::new("list-exporters")
                .long("list-exporters")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("outline").arg(
                Arg::new("input")
                    .required(true)
                    .index(1)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("new")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("title").long("title").value_hint(ValueHint::Other)),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();
    generate_to(Bash, &mut cmd, "scrivo", &outdir)?;
    generate_to(Zsh, &mut cmd, "scrivo", &outdir)?;
    generate_to(Fish, &mut cmd, "scrivo", &outdir)?;

    Ok(())
}
