//! Command implementations and argument parsing for the spantree CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use spantree_core::{Graph, ReadError, minimum_spanning_tree};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spantree",
    about = "Inspect graphs and compute minimum spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning tree (or forest) of a graph.
    Mst(MstArgs),
    /// Render a graph as a mermaid flowchart.
    Render(RenderArgs),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstArgs {
    /// Path to a graph in the plain text format.
    pub path: PathBuf,

    /// Output representation of the spanning tree.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the result to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Options accepted by the `render` command.
#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Path to a graph in the plain text format.
    pub path: PathBuf,

    /// Write the diagram to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Output representations supported by the `mst` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// The plain text graph format.
    Text,
    /// A mermaid flowchart block.
    Mermaid,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while reading input or writing output.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file did not contain a well-formed graph.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the rejected input.
        path: PathBuf,
        /// Underlying format error.
        #[source]
        source: ReadError,
    },
}

/// The rendered result of a CLI command and where it should go.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Rendered payload.
    pub body: String,
    /// Destination file; `None` means stdout.
    pub destination: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// Pure with respect to the filesystem apart from reading the input path;
/// writing the payload is left to [`write_output`].
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed.
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    match cli.command {
        Command::Mst(args) => {
            Span::current().record("command", field::display("mst"));
            run_mst(args)
        }
        Command::Render(args) => {
            Span::current().record("command", field::display("render"));
            run_render(args)
        }
    }
}

/// Writes a command's payload to its destination, falling back to `stdout`.
///
/// # Errors
/// Returns [`CliError::Io`] when the destination cannot be written.
pub fn write_output(output: &CommandOutput, stdout: &mut impl Write) -> Result<(), CliError> {
    match &output.destination {
        Some(path) => fs::write(path, &output.body).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        }),
        None => stdout
            .write_all(output.body.as_bytes())
            .map_err(|source| CliError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(args),
    fields(path = %args.path.display(), format = field::Empty),
)]
fn run_mst(args: MstArgs) -> Result<CommandOutput, CliError> {
    let mut graph = load_graph(&args.path)?;
    let tree = minimum_spanning_tree(&mut graph);

    let format_label = match args.format {
        OutputFormat::Text => "text",
        OutputFormat::Mermaid => "mermaid",
    };
    Span::current().record("format", field::display(format_label));

    info!(
        vertices = tree.vertex_count(),
        edges = tree.distinct_edges().len(),
        "spanning forest computed"
    );

    let body = match args.format {
        OutputFormat::Text => tree.to_text(),
        OutputFormat::Mermaid => tree.to_mermaid(),
    };
    Ok(CommandOutput {
        body,
        destination: args.output,
    })
}

#[instrument(name = "cli.render", err, skip(args), fields(path = %args.path.display()))]
fn run_render(args: RenderArgs) -> Result<CommandOutput, CliError> {
    let graph = load_graph(&args.path)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.distinct_edges().len(),
        "graph rendered"
    );
    Ok(CommandOutput {
        body: graph.to_mermaid(),
        destination: args.output,
    })
}

fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Graph::read_text(BufReader::new(file)).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
