//! Number literal lexing.
//!
//! Handles decimal, hexadecimal (`0x`), octal (`0o`) and binary (`0b`)
//! integers with `_` separators, plus decimal fractions and exponents.
//! A dot only continues a number when a digit follows it. A dot that starts
//! a token and is followed by a digit begins a number, so `0..10` lexes as
//! `0`, `.`, `.10`.

use crate::classification::Classification;
use crate::Lexer;

impl<'s, 'a> Lexer<'s, 'a> {
    /// Lexes a number whose first digit has already been consumed.
    pub fn lex_number(&mut self, first: char) -> Option<Classification> {
        if first == '0' {
            let radix = match self.cursor.peek(0) {
                Some('x' | 'X') => Some(16),
                Some('o') => Some(8),
                Some('b') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                let body = self.cursor.peek(1);
                if body.is_some_and(|c| c == '_' || c.is_digit(radix)) {
                    self.cursor.advance();
                    self.cursor.eat_while(|c| c == '_' || c.is_digit(radix));
                    return Some(Classification::Number);
                }
            }
        }

        self.eat_digits();
        if self.cursor.peek(0) == Some('.') && self.cursor.peek(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.eat_digits();
        }
        self.eat_exponent();
        Some(Classification::Number)
    }

    /// Consumes decimal digits and `_` separators.
    pub(crate) fn eat_digits(&mut self) -> bool {
        self.cursor.eat_while(|c| c == '_' || c.is_ascii_digit())
    }

    /// Consumes `e`/`E`, an optional sign and digits, but only when the
    /// exponent is complete.
    pub(crate) fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.peek(0), Some('e' | 'E')) {
            return false;
        }
        let digits_at = match self.cursor.peek(1) {
            Some('+' | '-') => 2,
            _ => 1,
        };
        if !self.cursor.peek(digits_at).is_some_and(|c| c.is_ascii_digit()) {
            return false;
        }
        for _ in 0..digits_at {
            self.cursor.advance();
        }
        self.eat_digits();
        true
    }
}
