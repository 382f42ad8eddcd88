//! Composition and export pipeline for scrivo projects
//!
//!     A scrivo project is an ordered, flat sequence of text parts. Each part
//!     carries a nesting level, a title, raw authored content in whatever
//!     dialect the author happened to paste (HTML fragment, Markdown or plain
//!     prose), optional image attachments and an include flag. This crate turns
//!     that sequence into publishable documents.
//!
//!     This is a pure lib, that is, it powers the scrivo CLI but is shell
//!     agnostic: no code here should suppose a shell environment, be it to
//!     std print, env vars (the pandoc override being the one deliberate
//!     exception) or exit codes.
//!
//! Pipeline
//!
//!     Two passes run over the sequence, always in this order:
//!
//!     1. Outline pass (./outline.rs): walks the parts once, carrying one
//!        counter per level, and assigns each part its per-level order and its
//!        dot-joined outline number ("2.1.3"). Counters deeper than the current
//!        part reset whenever the walk returns to a shallower level, so sibling
//!        numbering restarts per subtree. The pass keeps no state between
//!        calls and is idempotent.
//!
//!     2. Render pass (./content/): per part, detects the source dialect with
//!        text-pattern heuristics, converts the body to an HTML fragment with
//!        the matching strategy, normalizes embedded heading depths to the
//!        part's level, and prefixes a generated heading built from the title
//!        and the outline number.
//!
//!     Downstream of the passes, assembly (./assemble.rs) concatenates the
//!     fragments into a complete HTML page, and the exporters (./export/) turn
//!     a project into output documents, dispatched through a registry. The
//!     publish module (./publish.rs) is the one-call surface over all of it.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── part.rs                 # The part record
//!     ├── outline.rs              # Outline numbering pass
//!     ├── content                 # Dialect detection + body conversion
//!     │   ├── html.rs             # Body unwrapping, heading depth shift
//!     │   ├── markdown.rs         # comrak conversion
//!     │   └── plain.rs            # Line-per-paragraph wrapping
//!     ├── project.rs              # Project store + JSON persistence
//!     ├── assemble.rs             # Fragments → complete HTML page
//!     ├── export                  # Exporter trait, registry, targets
//!     ├── publish.rs              # High-level publish pipeline
//!     └── lib.rs
//!
//! Library Choices
//!
//!     We offload as much as possible to better, specialized crates. Markdown
//!     conversion goes through comrak (with the table extension set enabled);
//!     we never hand-write that serializer. The markup heuristics (dialect
//!     sniffing, heading-tag renumbering) are compiled regex patterns on
//!     purpose: a tree-building HTML parser would silently repair the
//!     unbalanced fragments that authors actually paste, and tolerating those
//!     verbatim is required behavior. DOCX goes through an external pandoc
//!     binary rather than a Rust docx writer, the same shell-out contract an
//!     editor's "Export to..." command uses.

pub mod assemble;
pub mod content;
pub mod error;
pub mod export;
pub mod outline;
pub mod part;
pub mod project;
pub mod publish;

pub use error::ComposeError;
pub use export::{ExportOutput, Exporter, ExporterRegistry};
pub use part::Part;
pub use project::Project;
pub use publish::{publish, PublishArtifact, PublishResult, PublishSpec};
