//! Configuration errors.

use thiserror::Error;

/// Largest indent unit a mode accepts.
pub const MAX_INDENT_UNIT: u32 = 16;

/// A [`ModeConfig`](crate::ModeConfig) that cannot drive a mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeConfigError {
    /// The indent unit is zero.
    #[error("indent unit must be at least 1")]
    ZeroIndentUnit,

    /// The tab size is zero.
    #[error("tab size must be at least 1")]
    ZeroTabSize,

    /// The indent unit is larger than [`MAX_INDENT_UNIT`].
    #[error("indent unit {0} exceeds the maximum of {MAX_INDENT_UNIT}")]
    IndentUnitTooLarge(u32),
}
