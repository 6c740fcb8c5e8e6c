//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the sub-tokenizer dispatch, and the
//! top-level dispatch that runs when no literal or comment is open.

use tracing::debug;

use crate::attribute::match_attribute;
use crate::chars::{is_ident_char, is_operator_char, is_punctuation};
use crate::classification::Classification;
use crate::context::BracketKind;
use crate::cursor::LineCursor;
use crate::state::{LexerState, Quote, Tokenizer};
use crate::tables::{keywords, pseudo_keywords};

/// How many times one call may hand over to another sub-tokenizer without
/// consuming input before the lexer forces progress.
const MAX_HANDOVERS: usize = 8;

/// Tokenizer for one V token.
///
/// A `Lexer` lives for a single call: it borrows the line cursor and the
/// persistent [`LexerState`], consumes one lexical unit, and records any
/// structural punctuation it saw for the host adapter to act on.
pub struct Lexer<'s, 'a> {
    /// Cursor over the current line.
    pub cursor: &'s mut LineCursor<'a>,

    /// State persisted across calls.
    pub state: &'s mut LexerState,

    /// Structural punctuation consumed by this call, if any.
    punctuation: Option<char>,
}

impl<'s, 'a> Lexer<'s, 'a> {
    /// Creates a lexer for one call.
    pub fn new(cursor: &'s mut LineCursor<'a>, state: &'s mut LexerState) -> Self {
        Self {
            cursor,
            state,
            punctuation: None,
        }
    }

    /// Returns the punctuation character recorded by the last token.
    pub fn punctuation(&self) -> Option<char> {
        self.punctuation
    }

    /// Consumes one lexical unit and classifies it.
    ///
    /// Runs whichever sub-tokenizer the state selects. A sub-tokenizer that
    /// only switches state without consuming anything (a string body that
    /// stops right at an interpolation, for instance) is followed by the next
    /// one within the same call, so every call on a non-empty remainder
    /// advances the cursor.
    pub fn next_token(&mut self) -> Option<Classification> {
        for _ in 0..MAX_HANDOVERS {
            let class = self.step();
            if !self.cursor.token_is_empty() || self.cursor.eol() {
                return class;
            }
        }
        self.cursor.advance();
        None
    }

    /// Runs the active sub-tokenizer once.
    fn step(&mut self) -> Option<Classification> {
        match self.state.tokenize {
            Tokenizer::Core => self.lex_core(),
            Tokenizer::StringBody(quote) => self.lex_string_body(quote),
            Tokenizer::RawString(quote) => self.lex_raw_string(quote),
            Tokenizer::Comment { depth } => self.lex_block_comment(depth),
            Tokenizer::LongInterpolation(quote) => self.lex_long_interpolation(quote),
            Tokenizer::ShortInterpolation(quote) => self.lex_short_interpolation(quote),
            Tokenizer::NextInterpolation(quote) => self.lex_next_interpolation(quote),
            Tokenizer::EscapeNext(quote) => self.lex_escape(quote),
        }
    }

    /// Top-level dispatch.
    ///
    /// The checks are mutually exclusive and tried in order; the first one
    /// that applies decides the token.
    pub(crate) fn lex_core(&mut self) -> Option<Classification> {
        let c = self.cursor.advance()?;

        if c == '}' && self.state.context().inside_string() {
            if let Some(quote) = self.state.context().active_quote() {
                self.state.tokenize = Tokenizer::StringBody(quote);
                return Some(Classification::EndInterpolation);
            }
        }

        if let Some(quote) = Quote::from_char(c) {
            self.state.context_mut().enter_string(quote);
            self.state.tokenize = Tokenizer::StringBody(quote);
            return self.lex_string_body(quote);
        }

        if c == 'r' || c == 'c' {
            if let Some(quote) = self.cursor.peek(0).and_then(raw_string_quote) {
                self.cursor.advance();
                self.state.tokenize = Tokenizer::RawString(quote);
                return self.lex_raw_string(quote);
            }
        }

        if c == '.' {
            return self.lex_dot();
        }

        if c == '[' && self.attribute_allowed() {
            if match_attribute(self.cursor).is_some() {
                return Some(Classification::Attribute);
            }
            debug!(column = self.cursor.column(), "bracket is not an attribute");
        }

        if c.is_ascii_digit() {
            return self.lex_number(c);
        }

        if is_punctuation(c) {
            self.punctuation = Some(c);
            return None;
        }

        if c == '/' {
            if self.cursor.eat('*') {
                self.state.tokenize = Tokenizer::Comment { depth: 1 };
                return self.lex_block_comment(1);
            }
            if self.cursor.eat('/') {
                return self.lex_line_comment();
            }
        }

        if is_operator_char(c) {
            return self.lex_operator();
        }

        if c == '@' {
            self.cursor.eat_while(is_ident_char);
            return Some(Classification::AtIdentifier);
        }

        if c == '$' {
            return self.lex_compile_time();
        }

        self.lex_identifier(c)
    }

    /// Decides whether a `[` just consumed may open an attribute.
    ///
    /// Attributes follow `@` (`@[inline]`), start a line, or follow a field
    /// type after whitespace (`name string [required]`). Inside `(` or `[`
    /// only the `@` form counts, and a keyword before the whitespace
    /// (`return [x]`, `in [a, b]`) means an array literal.
    fn attribute_allowed(&self) -> bool {
        let before = &self.cursor.line()[..self.cursor.token_start()];
        if before.ends_with('@') {
            return true;
        }
        if matches!(self.state.context().kind, BracketKind::Paren | BracketKind::Bracket) {
            return false;
        }
        if self.state.at_line_start {
            return true;
        }
        if !before.ends_with(char::is_whitespace) {
            return false;
        }
        let trimmed = before.trim_end();
        let word_start = trimmed
            .char_indices()
            .rev()
            .take_while(|&(_, c)| is_ident_char(c))
            .last()
            .map(|(i, _)| i);
        match word_start {
            Some(i) => {
                let word = &trimmed[i..];
                !keywords().contains(word) && !pseudo_keywords().contains(word)
            },
            None => false,
        }
    }
}

/// Raw strings are only written with single or double quotes.
fn raw_string_quote(c: char) -> Option<Quote> {
    match c {
        '\'' | '"' => Quote::from_char(c),
        _ => None,
    }
}
