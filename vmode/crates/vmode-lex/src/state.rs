//! Persistent lexer state.
//!
//! A [`LexerState`] is created once per document and threaded through every
//! tokenize call. It is `Clone`, so a host can keep a copy at each line start
//! and resume tokenizing from any of them after an edit.

use crate::context::{BracketKind, Context, ContextStack};

/// A string delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `'`
    Single,
    /// `"`
    Double,
    /// `` ` ``
    Backtick,
}

impl Quote {
    /// Maps a delimiter character to its quote.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    /// Returns the delimiter character.
    pub fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

/// The sub-tokenizer that runs on the next call.
///
/// Anything other than [`Tokenizer::Core`] means the previous call stopped in
/// the middle of a construct (a string, a comment, an interpolation) and the
/// next call must continue it instead of dispatching afresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenizer {
    /// Top-level dispatch.
    #[default]
    Core,
    /// Body of an interpolating string.
    StringBody(Quote),
    /// Body of an `r'...'` or `c'...'` string.
    RawString(Quote),
    /// Inside a block comment nested `depth` levels deep.
    Comment {
        /// Number of `/*` not yet closed.
        depth: u32,
    },
    /// Just after `${`.
    LongInterpolation(Quote),
    /// Inside a `$name.field` interpolation.
    ShortInterpolation(Quote),
    /// At a `$` that starts an interpolation.
    NextInterpolation(Quote),
    /// At a backslash that starts a valid escape.
    EscapeNext(Quote),
}

impl Tokenizer {
    /// Returns true while a literal or comment owns the cursor.
    pub fn is_mid_construct(self) -> bool {
        self != Self::Core
    }

    /// Returns true if whitespace before the next token is skipped rather
    /// than lexed as part of a literal or comment.
    pub fn skips_whitespace(self) -> bool {
        matches!(self, Self::Core | Self::LongInterpolation(_))
    }
}

/// State carried from one tokenize call to the next.
#[derive(Debug, Clone)]
pub struct LexerState {
    /// The sub-tokenizer for the next call.
    pub tokenize: Tokenizer,

    /// Open bracket contexts.
    pub contexts: ContextStack,

    /// Indentation measured at the start of the current logical line.
    pub indent_column: u32,

    /// True only for the first token after a line boundary.
    pub at_line_start: bool,
}

impl LexerState {
    /// Creates the state for a fresh document.
    pub fn new() -> Self {
        Self {
            tokenize: Tokenizer::Core,
            contexts: ContextStack::new(),
            indent_column: 0,
            at_line_start: true,
        }
    }

    /// Returns the innermost context.
    pub fn context(&self) -> &Context {
        self.contexts.top()
    }

    /// Returns the innermost context mutably.
    pub fn context_mut(&mut self) -> &mut Context {
        self.contexts.top_mut()
    }

    /// Opens a context whose opener sits at `open_column`.
    pub fn push_context(&mut self, open_column: u32, kind: BracketKind) {
        self.contexts.push(self.indent_column, open_column, kind);
    }

    /// Closes the innermost context, restoring the indentation it recorded.
    ///
    /// Does nothing at the root.
    pub fn pop_context(&mut self) {
        if let Some(popped) = self.contexts.pop() {
            if popped.kind != BracketKind::Top {
                self.indent_column = popped.indent_column;
            }
        }
    }

    /// Ends every string and interpolation still open at a line end.
    ///
    /// Block comments are left open.
    pub fn close_strings(&mut self) {
        if !matches!(self.tokenize, Tokenizer::Core | Tokenizer::Comment { .. }) {
            self.tokenize = Tokenizer::Core;
        }
        self.contexts.abandon_strings();
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new()
    }
}
