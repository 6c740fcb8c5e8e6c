//! Command trait for the vmodet CLI.
//!
//! Every subcommand renders its output to a string through [`Command`], and
//! the `run_*` entry points print it. Keeping rendering separate from
//! printing lets the commands be tested without capturing stdout.

use crate::error::Result;

/// A subcommand built from its parsed arguments.
pub trait Command {
    /// Parsed arguments merged with configuration.
    type Args;

    /// What `execute` produces; `String` for everything printed.
    type Output;

    /// Builds the command.
    fn new(args: Self::Args) -> Self;

    /// Runs the command without touching stdout.
    fn execute(&self) -> Result<Self::Output>;

    /// Subcommand name, for logs.
    fn name() -> &'static str;
}

/// Execute `command` and print its rendered output.
pub fn print_output<C>(command: &C) -> Result<()>
where
    C: Command<Output = String>,
{
    tracing::debug!(command = C::name(), "running");
    print!("{}", command.execute()?);
    Ok(())
}
