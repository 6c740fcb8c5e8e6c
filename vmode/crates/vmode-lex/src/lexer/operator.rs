//! Operator lexing.

use crate::chars::{is_ident_start, is_operator_char};
use crate::classification::Classification;
use crate::Lexer;

impl<'s, 'a> Lexer<'s, 'a> {
    /// Lexes a run of operator characters.
    ///
    /// The first character has already been consumed. The run is greedy, so
    /// `:=`, `<<=` and `!=` are single tokens.
    pub fn lex_operator(&mut self) -> Option<Classification> {
        self.cursor.eat_while(is_operator_char);
        Some(Classification::Operator)
    }

    /// Lexes the token starting with an already consumed `.`.
    ///
    /// `.5` and `.5e3` are numbers; any other dot is a one-character
    /// operator, so `..` and `...` come out as one operator token per dot.
    pub fn lex_dot(&mut self) -> Option<Classification> {
        if self.cursor.peek(0).is_some_and(|c| c.is_ascii_digit()) {
            self.eat_digits();
            self.eat_exponent();
            return Some(Classification::Number);
        }
        Some(Classification::Operator)
    }
}

/// Returns true if a `.` at this position would start a member access.
pub(crate) fn is_member_dot(next: Option<char>, after: Option<char>) -> bool {
    next == Some('.') && after.is_some_and(is_ident_start)
}
