//! Common types and utilities for vmodet commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use ansi_term::{Colour, Style};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use vmode_lex::Classification;

use crate::error::{Result, VmodetError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for `highlight`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Source text colored with ANSI escapes
    #[default]
    Ansi,
    /// One `line:start-end class text` row per span
    Spans,
    /// Spans as a JSON array of lines
    Json,
}

impl OutputFormat {
    /// Get the name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ansi => "ansi",
            Self::Spans => "spans",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read the V source named by `path`, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(VmodetError::Input(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(VmodetError::Input(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

// ============================================================================
// Styles
// ============================================================================

/// Terminal style for a classification.
pub fn style_for(class: Classification) -> Style {
    use Classification::*;

    match class {
        Comment => Style::new().fg(Colour::Yellow).dimmed(),
        Keyword => Style::new().fg(Colour::Cyan).bold(),
        Atom | Number => Style::new().fg(Colour::Purple),
        String => Style::new().fg(Colour::Green),
        ValidEscape | StartInterpolation | EndInterpolation => {
            Style::new().fg(Colour::Green).bold()
        }
        Builtin | Type => Style::new().fg(Colour::Blue),
        Function => Style::new().fg(Colour::Blue).bold(),
        ImportName => Style::new().fg(Colour::Blue).italic(),
        HashDirective | Attribute | AtIdentifier | CompileTimeIdentifier => {
            Style::new().fg(Colour::Red)
        }
        Property | Variable | Operator => Style::new(),
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when a requested line is past the end of the input.
    pub const LINE_OUT_OF_RANGE: &str = "Line is past the end of the input";
}
