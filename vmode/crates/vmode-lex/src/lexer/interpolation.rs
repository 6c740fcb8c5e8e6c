//! String interpolation lexing.
//!
//! `${expr}` hands the cursor back to the top-level dispatch until the
//! matching `}`; the quote stack on the current context tells that `}` which
//! string to resume. `$name` and `$name.field.field` are lexed in place.

use crate::chars::{is_ident_start, is_short_ident_char};
use crate::classification::Classification;
use crate::lexer::operator::is_member_dot;
use crate::state::{Quote, Tokenizer};
use crate::Lexer;

impl<'s, 'a> Lexer<'s, 'a> {
    /// Lexes the `$` or `${` that opens an interpolation.
    pub fn lex_next_interpolation(&mut self, quote: Quote) -> Option<Classification> {
        if self.cursor.eat('$') {
            self.state.tokenize = if self.cursor.eat('{') {
                Tokenizer::LongInterpolation(quote)
            } else {
                Tokenizer::ShortInterpolation(quote)
            };
            return Some(Classification::StartInterpolation);
        }
        self.state.tokenize = Tokenizer::StringBody(quote);
        self.lex_string_body(quote)
    }

    /// Lexes the first token after `${`.
    ///
    /// An immediate `}` closes the interpolation; anything else goes through
    /// the top-level dispatch.
    pub fn lex_long_interpolation(&mut self, quote: Quote) -> Option<Classification> {
        if self.cursor.eat('}') {
            self.state.tokenize = Tokenizer::StringBody(quote);
            return Some(Classification::EndInterpolation);
        }
        self.state.tokenize = Tokenizer::Core;
        self.lex_core()
    }

    /// Lexes one piece of a `$name.field` interpolation.
    ///
    /// Names become `variable` and each dot between names an `operator`. A `$`
    /// not followed by a name leaves the following text to the string body.
    pub fn lex_short_interpolation(&mut self, quote: Quote) -> Option<Classification> {
        match self.cursor.peek(0) {
            Some('.') if self.cursor.peek(1).is_some_and(is_ident_start) => {
                self.cursor.advance();
                Some(Classification::Operator)
            }
            Some(c) if is_ident_start(c) => {
                self.cursor.eat_while(is_short_ident_char);
                if !is_member_dot(self.cursor.peek(0), self.cursor.peek(1)) {
                    self.state.tokenize = Tokenizer::StringBody(quote);
                }
                Some(Classification::Variable)
            }
            _ => {
                self.state.tokenize = Tokenizer::StringBody(quote);
                self.lex_string_body(quote)
            }
        }
    }
}
