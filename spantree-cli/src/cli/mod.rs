//! Command-line interface orchestration for spantree.
//!
//! The CLI reads graphs in the plain text format, computes minimum
//! spanning trees, and renders graphs as mermaid diagrams.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, MstArgs, OutputFormat, RenderArgs, run_cli,
    write_output,
};
