//! CLI entry point for spantree.
//!
//! Parses command-line arguments with clap, executes the requested command,
//! writes the payload to its destination, and maps errors to appropriate
//! exit codes. Logging is initialised eagerly so subsequent operations can
//! emit structured diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spantree_cli::{
    cli::{Cli, CliError, run_cli, write_output},
    logging::{self, LoggingError},
};
use tracing::{error, field};

use spantree_core::ReadError;

/// Parse CLI arguments, execute the command, and flush the output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let output = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_output(&output, &mut writer).context("failed to write output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(graph_error_code)
            .map(field::display);
        error!(error = %err, code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Extracts the stable storage error code when the failure originated in
/// graph integrity checks.
fn graph_error_code(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::Parse {
            source: ReadError::Graph { source },
            ..
        } => Some(source.code().as_str()),
        _ => None,
    }
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
