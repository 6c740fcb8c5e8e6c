//! Comment lexing.
//!
//! Line comments run to the end of the line. Block comments nest, and an
//! unterminated one keeps the rest of the document in comment state.

use crate::classification::Classification;
use crate::state::Tokenizer;
use crate::Lexer;

impl<'s, 'a> Lexer<'s, 'a> {
    /// Lexes the rest of a `//` comment.
    pub fn lex_line_comment(&mut self) -> Option<Classification> {
        self.cursor.skip_to_end();
        Some(Classification::Comment)
    }

    /// Lexes block comment text `depth` levels deep.
    ///
    /// Consumes up to and including the `*/` that closes the outermost
    /// comment, or to the end of the line if it stays open.
    pub fn lex_block_comment(&mut self, mut depth: u32) -> Option<Classification> {
        while let Some(c) = self.cursor.advance() {
            if c == '*' && self.cursor.eat('/') {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.state.tokenize = Tokenizer::Core;
                    return Some(Classification::Comment);
                }
            } else if c == '/' && self.cursor.eat('*') {
                depth = depth.saturating_add(1);
            }
        }

        self.state.tokenize = Tokenizer::Comment { depth };
        Some(Classification::Comment)
    }
}
