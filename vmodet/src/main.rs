//! vmodet: the V editor mode on the command line.
//!
//! Parses arguments, merges them over `vmodet.toml`, and hands off to the
//! subcommands in [`commands`].

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{
    run_config, run_highlight, run_indent, run_mode, ConfigArgs, HighlightArgs, IndentArgs,
    ModeArgs,
};
use config::Config;
use error::{Result, VmodetError};

/// vmodet - V syntax highlighting and indentation from the command line
///
/// Runs the same incremental lexer an editor uses over whole files, printing
/// highlighted source, classified spans, or suggested indentation.
#[derive(Parser, Debug)]
#[command(name = "vmodet")]
#[command(author = "vmode Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "V syntax highlighting and indentation", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "VMODET_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VMODET_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "VMODET_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the vmodet CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Highlight a V source file
    ///
    /// Prints the file with ANSI colors, as one row per classified span,
    /// or as JSON.
    Highlight(HighlightCommand),

    /// Suggest indentation for a V source file
    ///
    /// Prints the suggested column of every line, of a single line, or the
    /// whole file re-indented.
    Indent(IndentCommand),

    /// Print the editor hints and lexer settings as JSON
    Mode,

    /// Print the effective configuration as TOML
    Config(ConfigCommand),
}

/// Arguments for the highlight subcommand.
#[derive(Parser, Debug)]
struct HighlightCommand {
    /// Source file (`-` for standard input)
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the indent subcommand.
#[derive(Parser, Debug)]
struct IndentCommand {
    /// Source file (`-` for standard input)
    input: PathBuf,

    /// Only report this line (1-based)
    #[arg(short, long)]
    line: Option<usize>,

    /// Print the re-indented source
    #[arg(long, conflicts_with = "line")]
    apply: bool,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,
}

/// Main entry point for the vmodet CLI.
///
/// Errors are reported on stderr and turn into a failing exit status.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    execute_command(cli.command, cli.no_color, config)
}

/// Sends `tracing` output to stderr, at `warn` or, with `--verbose`, `debug`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| VmodetError::Config(format!("cannot install logger: {e}")))
}

fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Highlight(args) => execute_highlight(args, no_color, config),
        Commands::Indent(args) => execute_indent(args, config),
        Commands::Mode => run_mode(ModeArgs { mode: config.mode }),
        Commands::Config(args) => run_config(ConfigArgs {
            config,
            write: args.write,
        }),
    }
}

/// Execute the highlight command.
fn execute_highlight(args: HighlightCommand, no_color: bool, config: Config) -> Result<()> {
    let highlight_args = HighlightArgs {
        input: args.input,
        format: args.format.unwrap_or(config.output.format),
        color: config.output.color && !no_color,
        mode: config.mode,
    };
    run_highlight(highlight_args)
}

/// Execute the indent command.
fn execute_indent(args: IndentCommand, config: Config) -> Result<()> {
    let indent_args = IndentArgs {
        input: args.input,
        line: args.line,
        apply: args.apply,
        mode: config.mode,
    };
    run_indent(indent_args)
}
