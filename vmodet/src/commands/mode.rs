//! Mode command implementation.
//!
//! Prints the editor hints and the effective lexer settings as JSON, for
//! editor integrations that configure themselves from the CLI.

use serde::Serialize;
use vmode_lex::{Classification, Mode, ModeConfig, ModeInfo};

use crate::commands::traits::{print_output, Command};
use crate::error::Result;

/// Arguments for the mode command.
#[derive(Debug, Clone, Default)]
pub struct ModeArgs {
    /// Lexer settings.
    pub mode: ModeConfig,
}

/// Mode command handler.
pub struct ModeCommand {
    args: ModeArgs,
}

#[derive(Debug, Serialize)]
struct ModeReport {
    info: ModeInfo,
    config: ModeConfig,
    classifications: Vec<&'static str>,
}

impl Command for ModeCommand {
    type Args = ModeArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let mode = Mode::new(self.args.mode)?;
        let report = ModeReport {
            info: mode.info(),
            config: *mode.config(),
            classifications: Classification::ALL.iter().map(|c| c.as_str()).collect(),
        };
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        Ok(out)
    }

    fn name() -> &'static str {
        "mode"
    }
}

/// Run the mode command.
pub fn run_mode(args: ModeArgs) -> Result<()> {
    print_output(&ModeCommand::new(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_report() {
        let out = ModeCommand::new(ModeArgs::default()).execute().unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["info"]["electricChars"], "{}):");
        assert_eq!(value["info"]["blockCommentStart"], "/*");
        assert_eq!(value["config"]["indent_unit"], 4);
        assert_eq!(value["classifications"].as_array().map(Vec::len), Some(19));
    }

    #[test]
    fn test_mode_rejects_invalid_settings() {
        let command = ModeCommand::new(ModeArgs {
            mode: ModeConfig {
                tab_size: 0,
                ..ModeConfig::default()
            },
        });
        assert!(command.execute().is_err());
    }
}
