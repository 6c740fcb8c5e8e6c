//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file as a
//! starting point for a `vmodet.toml`.

use std::path::PathBuf;

use tracing::info;

use crate::commands::traits::{print_output, Command};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// The effective configuration.
    pub config: Config,
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Config command handler.
pub struct ConfigCommand {
    args: ConfigArgs,
}

impl Command for ConfigCommand {
    type Args = ConfigArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        match &self.args.write {
            Some(path) => {
                self.args.config.save_to_path(path)?;
                info!(path = %path.display(), "wrote configuration");
                Ok(String::new())
            }
            None => self.args.config.to_toml(),
        }
    }

    fn name() -> &'static str {
        "config"
    }
}

/// Run the config command.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    print_output(&ConfigCommand::new(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_print_defaults() {
        let out = ConfigCommand::new(ConfigArgs::default()).execute().unwrap();
        assert!(out.contains("[mode]"));
        assert!(out.contains("indent_unit = 4"));
        assert!(out.contains("format = \"ansi\""));
    }

    #[test]
    fn test_write_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vmodet.toml");
        let mut config = Config::default();
        config.mode.indent_unit = 2;

        let out = ConfigCommand::new(ConfigArgs {
            config: config.clone(),
            write: Some(path.clone()),
        })
        .execute()
        .unwrap();
        assert!(out.is_empty());
        assert_eq!(Config::load_from_path(&path).unwrap(), config);
    }
}
