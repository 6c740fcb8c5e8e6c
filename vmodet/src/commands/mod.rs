//! `vmodet` subcommands, one file each, plus shared helpers.

pub mod common;
pub mod traits;

pub mod config;
pub mod highlight;
pub mod indent;
pub mod mode;

pub use config::{run_config, ConfigArgs};
pub use highlight::{run_highlight, HighlightArgs};
pub use indent::{run_indent, IndentArgs};
pub use mode::{run_mode, ModeArgs};
