//! `vmodet.toml` handling.
//!
//! The file has a `[mode]` table, passed straight to the lexer as a
//! [`ModeConfig`], and an `[output]` table with CLI display defaults.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vmode_lex::ModeConfig;

use crate::commands::common::OutputFormat;
use crate::error::{Result, VmodetError};

/// File name looked up in each search directory.
pub const CONFIG_FILE_NAME: &str = "vmodet.toml";

/// Settings read from `vmodet.toml`. Missing tables and keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lexer settings.
    pub mode: ModeConfig,

    /// Output settings.
    pub output: OutputConfig,
}

/// The `[output]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used by `highlight` when `--format` is not given.
    pub format: OutputFormat,

    /// Colour ANSI output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Ansi,
            color: true,
        }
    }
}

impl Config {
    /// Loads the first `vmodet.toml` found in [`Config::search_paths`], or
    /// the defaults when there is none.
    pub fn load() -> Result<Self> {
        let found = Self::search_paths().into_iter().find(|path| path.is_file());
        match found {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no vmodet.toml found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Candidate locations, most specific first: the working directory,
    /// `~/.config/vmodet`, then the platform configuration directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config/vmodet").join(CONFIG_FILE_NAME));
        }
        if let Some(platform) = dirs::config_dir() {
            paths.push(platform.join("vmodet").join(CONFIG_FILE_NAME));
        }
        paths.dedup();
        paths
    }

    /// Reads and validates the file at `path`. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                VmodetError::Config(format!("Configuration file not found: {}", path.display()))
            },
            _ => VmodetError::Io(e),
        })?;

        let config: Config = toml::from_str(&text).map_err(|e| {
            VmodetError::Config(format!("Invalid {}: {}", path.display(), e.message()))
        })?;
        config.mode.validate()?;

        debug!(path = %path.display(), ?config.mode, "configuration loaded");
        Ok(config)
    }

    /// Writes the configuration to `path`, creating missing directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// The configuration as pretty-printed TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| VmodetError::Config(format!("Cannot serialize configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mode, ModeConfig::default());
        assert_eq!(config.output.format, OutputFormat::Ansi);
        assert!(config.output.color);
    }

    #[test]
    fn test_written_file_reads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = Config {
            mode: ModeConfig {
                indent_unit: 2,
                tab_size: 8,
                multiline_strings: true,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
                color: false,
            },
        };

        config.save_to_path(&path).unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[mode]\nindent_unit = 2\n");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.mode.indent_unit, 2);
        assert_eq!(config.mode.tab_size, 4);
        assert_eq!(config.output, OutputConfig::default());

        let path = write_config(&dir, "[output]\nformat = \"spans\"\n");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Spans);
        assert!(config.output.color);
    }

    #[test]
    fn test_zero_tab_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[mode]\ntab_size = 0\n");
        assert!(matches!(Config::load_from_path(&path), Err(VmodetError::Mode(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[output\nformat = ");
        assert!(matches!(Config::load_from_path(&path), Err(VmodetError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_search_starts_in_working_directory() {
        let paths = Config::search_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE_NAME));
        assert!(paths.iter().all(|path| path.ends_with(CONFIG_FILE_NAME)));
    }
}
