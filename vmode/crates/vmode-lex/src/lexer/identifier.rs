//! Identifier lexing and classification.
//!
//! Plain identifiers are classified from the tables, their spelling and
//! what follows them. `@name`, `$name` and `#name` are handled here too.

use crate::chars::is_ident_char;
use crate::classification::Classification;
use crate::lexer::operator::is_member_dot;
use crate::tables::{atoms, builtin_types, hash_directives, keywords, pseudo_keywords};
use crate::Lexer;

impl<'s, 'a> Lexer<'s, 'a> {
    /// Lexes an identifier whose first character has already been consumed.
    ///
    /// A character that cannot start an identifier is consumed on its own
    /// and left unclassified. `#name` is a hash directive when the table
    /// knows it and unclassified otherwise.
    pub fn lex_identifier(&mut self, first: char) -> Option<Classification> {
        let was_dot = self.cursor.char_before_token() == Some('.');
        if first != '#' && !is_ident_char(first) {
            return None;
        }

        self.cursor.eat_while(is_ident_char);
        let text = self.cursor.current();

        if first == '#' {
            return hash_directives()
                .contains(text)
                .then_some(Classification::HashDirective);
        }
        Some(self.classify_identifier(text, was_dot))
    }

    /// Lexes `$name`: a keyword when `name` is reserved (`$if`, `$for`),
    /// otherwise a compile-time identifier.
    pub fn lex_compile_time(&mut self) -> Option<Classification> {
        self.cursor.eat_while(is_ident_char);
        let name = &self.cursor.current()[1..];
        if keywords().contains(name) {
            Some(Classification::Keyword)
        } else {
            Some(Classification::CompileTimeIdentifier)
        }
    }

    /// Classifies identifier `text`, already consumed.
    ///
    /// `was_dot` is true when the identifier directly follows a `.`. The
    /// checks run in order and the first that applies wins.
    pub fn classify_identifier(&mut self, text: &str, was_dot: bool) -> Classification {
        if text == "import" {
            self.state.context_mut().expecting_import_name = true;
        }

        if keywords().contains(text) || pseudo_keywords().contains(text) {
            return Classification::Keyword;
        }
        if atoms().contains(text) {
            return Classification::Atom;
        }
        if hash_directives().contains(text) {
            return Classification::HashDirective;
        }
        if !was_dot && builtin_types().contains(text) {
            return Classification::Builtin;
        }
        if text.chars().next().is_some_and(char::is_uppercase) {
            return Classification::Type;
        }

        let next = self.cursor.peek(0);
        match next {
            Some('(' | '<') => return Classification::Function,
            Some('[') if self.cursor.peek(1).is_some_and(|c| c.is_ascii_alphabetic()) => {
                return Classification::Function;
            }
            _ => {}
        }

        if self.state.context().expecting_import_name && next != Some('.') {
            self.state.context_mut().expecting_import_name = false;
            self.state.contexts.add_import(text);
            return Classification::ImportName;
        }
        if was_dot {
            return Classification::Property;
        }
        if self.state.contexts.knows_import(text) && is_member_dot(next, self.cursor.peek(1)) {
            return Classification::ImportName;
        }
        Classification::Variable
    }
}
