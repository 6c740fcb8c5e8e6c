//! String literal lexing.
//!
//! An interpolating string body is split into pieces: plain text comes out
//! as `string`, each valid escape as `valid-escape`, and each `$` hands over
//! to the interpolation tokenizers. Raw strings are one `string` token.

use crate::chars::is_valid_escape_char;
use crate::classification::Classification;
use crate::state::{Quote, Tokenizer};
use crate::Lexer;

impl<'s, 'a> Lexer<'s, 'a> {
    /// Lexes string text up to the closing quote, an escape, an
    /// interpolation, or the end of the line.
    ///
    /// Stops *before* a `$` or a valid escape so the next call classifies it.
    /// A string still open at the end of the line stays open unless the line
    /// ended in a lone backslash.
    pub fn lex_string_body(&mut self, quote: Quote) -> Option<Classification> {
        let delimiter = quote.as_char();
        let mut escaped = false;
        let mut closed = false;

        while let Some(c) = self.cursor.advance() {
            if c == delimiter && !escaped {
                closed = true;
                break;
            }
            if c == '$' && !escaped {
                self.cursor.unread(1);
                self.state.tokenize = Tokenizer::NextInterpolation(quote);
                return Some(Classification::String);
            }
            if escaped && is_valid_escape_char(c) {
                self.cursor.unread(2);
                self.state.tokenize = Tokenizer::EscapeNext(quote);
                return Some(Classification::String);
            }
            escaped = !escaped && c == '\\';
        }

        if closed || escaped {
            self.state.tokenize = Tokenizer::Core;
            self.state.context_mut().leave_string();
        }
        Some(Classification::String)
    }

    /// Lexes raw string text. Backslashes only protect the delimiter.
    pub fn lex_raw_string(&mut self, quote: Quote) -> Option<Classification> {
        let delimiter = quote.as_char();
        let mut escaped = false;
        let mut closed = false;

        while let Some(c) = self.cursor.advance() {
            if c == delimiter && !escaped {
                closed = true;
                break;
            }
            escaped = !escaped && c == '\\';
        }

        if closed || escaped {
            self.state.tokenize = Tokenizer::Core;
        }
        Some(Classification::String)
    }

    /// Lexes a backslash and the character it escapes.
    pub fn lex_escape(&mut self, quote: Quote) -> Option<Classification> {
        self.state.tokenize = Tokenizer::StringBody(quote);
        if self.cursor.eat('\\') {
            self.cursor.advance();
            return Some(Classification::ValidEscape);
        }
        self.lex_string_body(quote)
    }
}

#[cfg(test)]
mod tests {
    use crate::classification::Classification;
    use crate::cursor::LineCursor;
    use crate::state::{LexerState, Quote, Tokenizer};
    use crate::Lexer;

    use Classification::ValidEscape;

    fn lex_all(line: &str, state: &mut LexerState) -> Vec<(Option<Classification>, String)> {
        let mut cursor = LineCursor::new(line, 4);
        let mut tokens = Vec::new();
        while !cursor.eol() {
            if state.tokenize.skips_whitespace() && cursor.eat_space() {
                continue;
            }
            cursor.start_token();
            let class = Lexer::new(&mut cursor, state).next_token();
            tokens.push((class, cursor.current().to_string()));
        }
        tokens
    }

    fn tokens(line: &str) -> Vec<(Option<Classification>, String)> {
        lex_all(line, &mut LexerState::new())
    }

    fn tok(class: Classification, text: &str) -> (Option<Classification>, String) {
        (Some(class), text.to_string())
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(tokens("'hello'"), vec![tok(Classification::String, "'hello'")]);
        assert_eq!(tokens("`c`"), vec![tok(Classification::String, "`c`")]);
    }

    #[test]
    fn test_other_quotes_inside() {
        assert_eq!(tokens(r#"'say "hi"'"#), vec![tok(Classification::String, r#"'say "hi"'"#)]);
    }

    #[test]
    fn test_escapes_split_string() {
        assert_eq!(
            tokens(r#""a\nb""#),
            vec![tok(Classification::String, "\"a"), tok(ValidEscape, r"\n"), tok(Classification::String, "b\"")]
        );
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(
            tokens(r#""a\"b""#),
            vec![tok(Classification::String, "\"a"), tok(ValidEscape, "\\\""), tok(Classification::String, "b\"")]
        );
    }

    #[test]
    fn test_escape_at_string_start() {
        assert_eq!(
            tokens(r#""\t""#),
            vec![tok(Classification::String, "\""), tok(ValidEscape, r"\t"), tok(Classification::String, "\"")]
        );
    }

    #[test]
    fn test_invalid_escape_stays_string() {
        assert_eq!(tokens(r"'\q'"), vec![tok(Classification::String, r"'\q'")]);
    }

    #[test]
    fn test_escaped_dollar_is_text() {
        assert_eq!(tokens(r"'\$x'"), vec![tok(Classification::String, r"'\$x'")]);
    }

    #[test]
    fn test_unterminated_string_stays_open() {
        let mut state = LexerState::new();
        lex_all("'abc", &mut state);
        assert_eq!(state.tokenize, Tokenizer::StringBody(Quote::Single));
        assert!(state.context().inside_string());

        let rest = lex_all("def' x", &mut state);
        assert_eq!(rest[0], tok(Classification::String, "def'"));
        assert_eq!(state.tokenize, Tokenizer::Core);
        assert!(!state.context().inside_string());
    }

    #[test]
    fn test_trailing_backslash_ends_string() {
        let mut state = LexerState::new();
        lex_all(r"'abc\", &mut state);
        assert_eq!(state.tokenize, Tokenizer::Core);
        assert!(!state.context().inside_string());
    }

    #[test]
    fn test_raw_string_ignores_escapes_and_dollars() {
        assert_eq!(tokens(r"r'\n $x'"), vec![tok(Classification::String, r"r'\n $x'")]);
        assert_eq!(tokens(r#"c"abc""#), vec![tok(Classification::String, r#"c"abc""#)]);
    }

    #[test]
    fn test_raw_string_escaped_delimiter() {
        assert_eq!(tokens(r"r'a\'b'"), vec![tok(Classification::String, r"r'a\'b'")]);
    }
}
