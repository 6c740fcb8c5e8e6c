//! Lexer module.
//!
//! This module organizes the tokenizer into smaller, focused components:
//! - `core` - Lexer struct, sub-tokenizer dispatch and top-level dispatch
//! - `identifier` - identifier classification, `@name` and `$name`
//! - `number` - numeric literals
//! - `string` - string bodies, raw strings and escapes
//! - `interpolation` - `${expr}` and `$name.field` interpolation
//! - `comment` - line and block comments
//! - `operator` - operator runs and the member-access dot

mod comment;
mod core;
mod identifier;
mod interpolation;
mod number;
mod operator;
mod string;

pub use core::Lexer;
