//! The editor-facing mode.
//!
//! [`Mode`] is what a host editor drives: it hands out the initial state,
//! tokenizes one token per call while keeping the bracket contexts current,
//! and answers indentation queries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classification::Classification;
use crate::context::BracketKind;
use crate::cursor::LineCursor;
use crate::error::{ModeConfigError, MAX_INDENT_UNIT};
use crate::indent::compute_indent;
use crate::state::LexerState;
use crate::Lexer;

/// Settings a host may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfig {
    /// Columns added per nesting level by hanging indentation.
    pub indent_unit: u32,

    /// Width of a tab stop when measuring columns.
    pub tab_size: u32,

    /// Keep strings open across line breaks. When false, every string and
    /// interpolation still open at the end of a line is closed there.
    pub multiline_strings: bool,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: 4,
            tab_size: 4,
            multiline_strings: false,
        }
    }
}

impl ModeConfig {
    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<(), ModeConfigError> {
        if self.indent_unit == 0 {
            return Err(ModeConfigError::ZeroIndentUnit);
        }
        if self.indent_unit > MAX_INDENT_UNIT {
            return Err(ModeConfigError::IndentUnitTooLarge(self.indent_unit));
        }
        if self.tab_size == 0 {
            return Err(ModeConfigError::ZeroTabSize);
        }
        Ok(())
    }
}

/// Static editor hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    /// Mode name.
    pub name: &'static str,
    /// Typing one of these re-indents the line.
    pub electric_chars: &'static str,
    /// Pairs auto-closed by the editor.
    pub close_brackets: &'static str,
    /// Folding strategy.
    pub fold: &'static str,
    /// Block comment opener.
    pub block_comment_start: &'static str,
    /// Block comment closer.
    pub block_comment_end: &'static str,
    /// Line comment marker.
    pub line_comment: &'static str,
}

/// Editor hints for V.
pub const MODE_INFO: ModeInfo = ModeInfo {
    name: "v",
    electric_chars: "{}):",
    close_brackets: "()[]{}''\"\"``",
    fold: "brace",
    block_comment_start: "/*",
    block_comment_end: "*/",
    line_comment: "//",
};

/// A configured V mode.
///
/// # Example
///
/// ```
/// use vmode_lex::{Classification, LineCursor, Mode};
///
/// let mode = Mode::default();
/// let mut state = mode.start_state();
/// let mut cursor = LineCursor::new("fn main() {", 4);
///
/// assert_eq!(mode.token(&mut cursor, &mut state), Some(Classification::Keyword));
/// assert_eq!(mode.token(&mut cursor, &mut state), None);
/// assert_eq!(mode.token(&mut cursor, &mut state), Some(Classification::Function));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mode {
    config: ModeConfig,
}

impl Mode {
    /// Creates a mode after validating `config`.
    pub fn new(config: ModeConfig) -> Result<Self, ModeConfigError> {
        config.validate()?;
        debug!(?config, "mode configured");
        Ok(Self { config })
    }

    /// Returns the settings this mode runs with.
    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// Returns the static editor hints.
    pub fn info(&self) -> ModeInfo {
        MODE_INFO
    }

    /// Creates the state for the first line of a document.
    pub fn start_state(&self) -> LexerState {
        LexerState::new()
    }

    /// Consumes one token from `cursor` and classifies it.
    ///
    /// Returns `None` for whitespace, brackets and other text that carries
    /// no highlighting. Brackets open and close contexts here, and the first
    /// token after an opener decides whether the bracket's continuation
    /// lines align to it.
    pub fn token(&self, cursor: &mut LineCursor<'_>, state: &mut LexerState) -> Option<Classification> {
        if cursor.sol() {
            let ctx = state.context_mut();
            if ctx.align.is_none() {
                ctx.align = Some(false);
            }
            state.indent_column = cursor.indentation();
            state.at_line_start = true;
        }

        cursor.start_token();
        let class = if state.tokenize.skips_whitespace() && cursor.eat_space() {
            None
        } else {
            self.lex_token(cursor, state)
        };

        if cursor.eol() && !self.config.multiline_strings {
            state.close_strings();
        }
        class
    }

    fn lex_token(&self, cursor: &mut LineCursor<'_>, state: &mut LexerState) -> Option<Classification> {
        let mut lexer = Lexer::new(cursor, state);
        let class = lexer.next_token();
        let punctuation = lexer.punctuation();

        if class == Some(Classification::Comment) {
            return class;
        }

        let ctx = state.context_mut();
        if ctx.align.is_none() {
            ctx.align = Some(true);
        }

        if let Some(c) = punctuation {
            if let Some(opened) = BracketKind::for_opener(c) {
                state.push_context(cursor.column(), opened);
            } else if state.context().kind.is_closed_by(c) {
                state.pop_context();
            }
        }

        state.at_line_start = false;
        class
    }

    /// Suggests the indentation column for a line whose text is
    /// `text_after`, given the state after the line before it.
    pub fn indent(&self, state: &LexerState, text_after: &str) -> u32 {
        compute_indent(state, text_after, self.config.indent_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Quote, Tokenizer};

    fn run_line(mode: &Mode, line: &str, state: &mut LexerState) {
        let mut cursor = LineCursor::new(line, mode.config().tab_size as usize);
        while !cursor.eol() {
            mode.token(&mut cursor, state);
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(ModeConfig::default().validate().is_ok());

        let zero = ModeConfig {
            indent_unit: 0,
            ..ModeConfig::default()
        };
        assert_eq!(zero.validate(), Err(ModeConfigError::ZeroIndentUnit));

        let huge = ModeConfig {
            indent_unit: 40,
            ..ModeConfig::default()
        };
        assert_eq!(huge.validate(), Err(ModeConfigError::IndentUnitTooLarge(40)));

        let no_tabs = ModeConfig {
            tab_size: 0,
            ..ModeConfig::default()
        };
        assert!(Mode::new(no_tabs).is_err());
    }

    #[test]
    fn test_brackets_push_and_pop() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "fn main() {", &mut state);
        assert_eq!(state.context().kind, BracketKind::Brace);
        assert_eq!(state.contexts.depth(), 2);
        run_line(&mode, "}", &mut state);
        assert!(state.contexts.is_root());
    }

    #[test]
    fn test_mismatched_closer_is_ignored() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "foo(a]", &mut state);
        assert_eq!(state.context().kind, BracketKind::Paren);
        run_line(&mode, ")}", &mut state);
        assert!(state.contexts.is_root());
    }

    #[test]
    fn test_alignment_decided_by_first_token() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "foo(a,", &mut state);
        assert_eq!(state.context().align, Some(true));
        assert_eq!(mode.indent(&state, "b)"), 4);

        let mut state = mode.start_state();
        run_line(&mode, "foo(", &mut state);
        assert_eq!(state.context().align, None);
        assert_eq!(mode.indent(&state, "b)"), 4);
        run_line(&mode, "    b,", &mut state);
        assert_eq!(state.context().align, Some(false));
    }

    #[test]
    fn test_comment_after_opener_does_not_align() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "x := [ // items", &mut state);
        assert_eq!(state.context().align, None);
    }

    #[test]
    fn test_closing_restores_indentation() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "    if x {", &mut state);
        assert_eq!(state.indent_column, 4);
        assert_eq!(mode.indent(&state, "y"), 8);
        assert_eq!(mode.indent(&state, "}"), 4);
    }

    #[test]
    fn test_strings_close_at_line_end_by_default() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "s := 'abc", &mut state);
        assert_eq!(state.tokenize, Tokenizer::Core);
        assert!(!state.context().inside_string());
    }

    #[test]
    fn test_multiline_strings_stay_open() {
        let mode = Mode::new(ModeConfig {
            multiline_strings: true,
            ..ModeConfig::default()
        })
        .unwrap();
        let mut state = mode.start_state();
        run_line(&mode, "s := 'abc", &mut state);
        assert_eq!(state.tokenize, Tokenizer::StringBody(Quote::Single));
        assert_eq!(mode.indent(&state, "def'"), 0);
        run_line(&mode, "def'", &mut state);
        assert_eq!(state.tokenize, Tokenizer::Core);
    }

    #[test]
    fn test_block_comment_survives_line_end() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "/* open", &mut state);
        assert_eq!(state.tokenize, Tokenizer::Comment { depth: 1 });
    }

    #[test]
    fn test_open_interpolation_closes_at_line_end() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        run_line(&mode, "s := '${foo(", &mut state);
        assert_eq!(state.tokenize, Tokenizer::Core);
        assert!(!state.contexts.iter().any(|c| c.inside_string()));
        assert_eq!(state.context().kind, BracketKind::Paren);
    }

    #[test]
    fn test_mode_info_json() {
        let json = serde_json::to_value(Mode::default().info()).unwrap();
        assert_eq!(json["electricChars"], "{}):");
        assert_eq!(json["fold"], "brace");
        assert_eq!(json["lineComment"], "//");
    }
}
