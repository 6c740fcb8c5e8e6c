//! vmode-lex - Incremental V Lexer for Editor Highlighting
//!
//! This crate tokenizes V source one token at a time, the way a code editor
//! drives a syntax mode: the host owns the document, hands the lexer a cursor
//! over the current line plus the state left by the previous call, and gets
//! back one classification per call. Between calls the lexer keeps only a
//! small [`LexerState`], so a host can snapshot it at every line start and
//! re-highlight from any line after an edit.
//!
//! # Example Usage
//!
//! ```
//! use vmode_lex::{highlight, Classification, Mode};
//!
//! let mode = Mode::default();
//! let lines = highlight(&mode, "import os\n\nfn main() {\n\tprintln(os.args)\n}");
//!
//! let first: Vec<_> = lines[0].spans.iter().map(|s| s.class).collect();
//! assert_eq!(first, vec![Classification::Keyword, Classification::ImportName]);
//! ```
//!
//! Driving the mode directly:
//!
//! ```
//! use vmode_lex::{LineCursor, Mode};
//!
//! let mode = Mode::default();
//! let mut state = mode.start_state();
//! for line in ["fn main() {", "x := 1"] {
//!     let mut cursor = LineCursor::new(line, 4);
//!     while !cursor.eol() {
//!         mode.token(&mut cursor, &mut state);
//!     }
//! }
//! assert_eq!(mode.indent(&state, "}"), 0);
//! assert_eq!(mode.indent(&state, "y := 2"), 4);
//! ```
//!
//! # Module Structure
//!
//! - [`mode`] - The host-facing mode: start state, token, indent, hints
//! - [`lexer`] - The tokenizer and its sub-tokenizers
//! - [`state`] - State persisted between calls
//! - [`context`] - Bracket context stack and import names
//! - [`cursor`] - Single-line cursor
//! - [`classification`] - Classification labels
//! - [`tables`] - Keyword, atom, directive and builtin type tables
//! - [`attribute`] - `[attr]` shape matchers
//! - [`indent`] - Indentation calculation
//! - [`highlight`] - Whole-line and whole-document drivers
//!
//! # Classifications
//!
//! `keyword atom hash-directive builtin type function import-name property
//! variable operator number string comment attribute at-identifier
//! compile-time-identifier start-interpolation end-interpolation
//! valid-escape`. Whitespace and brackets are returned unclassified.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod attribute;
pub mod chars;
pub mod classification;
pub mod context;
pub mod cursor;
pub mod error;
pub mod highlight;
pub mod indent;
pub mod lexer;
pub mod mode;
pub mod state;
pub mod tables;

mod edge_cases;

// Host-facing surface
pub use classification::Classification;
pub use context::{BracketKind, Context, ContextId, ContextStack};
pub use cursor::LineCursor;
pub use error::ModeConfigError;
pub use highlight::{highlight, highlight_line, indent_lines, LineTokens, Span};
pub use indent::compute_indent;
pub use lexer::Lexer;
pub use mode::{Mode, ModeConfig, ModeInfo, MODE_INFO};
pub use state::{LexerState, Quote, Tokenizer};

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{
        AtIdentifier, Atom, Attribute, Builtin, Comment, EndInterpolation, Function, ImportName,
        Keyword, Number, Operator, Property, StartInterpolation, Type, Variable,
    };

    /// Classifies every line of `source`, dropping positions.
    fn classes(source: &str) -> Vec<Vec<(String, Classification)>> {
        let mode = Mode::default();
        let lines: Vec<&str> = source.lines().collect();
        highlight(&mode, source)
            .into_iter()
            .map(|tokens| {
                let text = lines[tokens.line];
                tokens
                    .spans
                    .iter()
                    .map(|s| (text[s.start..s.end].to_string(), s.class))
                    .collect()
            })
            .collect()
    }

    fn t(text: &str, class: Classification) -> (String, Classification) {
        (text.to_string(), class)
    }

    #[test]
    fn test_hello_world_program() {
        let source = r#"module main

import os

fn main() {
	name := os.args[1] or { 'world' }
	println("hello ${name}")
}"#;
        let lines = classes(source);
        assert_eq!(lines[0], vec![t("module", Keyword), t("main", Variable)]);
        assert_eq!(lines[2], vec![t("import", Keyword), t("os", ImportName)]);
        assert_eq!(lines[4], vec![t("fn", Keyword), t("main", Function)]);
        assert_eq!(
            lines[5],
            vec![
                t("name", Variable),
                t("=", Operator),
                t("os", ImportName),
                t(".", Operator),
                t("args", Property),
                t("1", Number),
                t("or", Keyword),
                t("'world'", Classification::String),
            ]
        );
        assert_eq!(
            lines[6],
            vec![
                t("println", Atom),
                t("\"hello ", Classification::String),
                t("${", StartInterpolation),
                t("name", Variable),
                t("}", EndInterpolation),
                t("\"", Classification::String),
            ]
        );
    }

    #[test]
    fn test_struct_with_attributes() {
        let source = r#"[table: 'users']
pub struct User {
	id   int    [primary; sql: serial]
	name string [required]
mut:
	tags []string
}"#;
        let lines = classes(source);
        assert_eq!(lines[0], vec![t("[table: 'users']", Attribute)]);
        assert_eq!(lines[1], vec![t("pub", Keyword), t("struct", Keyword), t("User", Type)]);
        assert_eq!(
            lines[2],
            vec![t("id", Variable), t("int", Builtin), t("[primary; sql: serial]", Attribute)]
        );
        assert_eq!(lines[3].last(), Some(&t("[required]", Attribute)));
        assert_eq!(lines[4], vec![t("mut", Keyword)]);
        assert_eq!(lines[5], vec![t("tags", Variable), t("string", Builtin)]);
    }

    #[test]
    fn test_compile_time_and_at_names() {
        let lines = classes("$if windows {\n\tprintln(@FN)\n}");
        assert_eq!(lines[0], vec![t("$if", Keyword), t("windows", Variable)]);
        assert_eq!(lines[1], vec![t("println", Atom), t("@FN", AtIdentifier)]);
    }

    #[test]
    fn test_generic_function() {
        let lines = classes("fn max[T](a T, b T) T {");
        assert_eq!(lines[0][1], t("max", Function));
        assert_eq!(lines[0][2], t("T", Type));
    }

    #[test]
    fn test_multiline_block_comment() {
        let lines = classes("x := 1 /* start\nmiddle\nend */ y := 2");
        assert_eq!(lines[0].last(), Some(&t("/* start", Comment)));
        assert_eq!(lines[1], vec![t("middle", Comment)]);
        assert_eq!(lines[2][0], t("end */", Comment));
        assert_eq!(lines[2][1], t("y", Variable));
    }
}
