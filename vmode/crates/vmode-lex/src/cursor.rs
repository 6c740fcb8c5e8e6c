//! Line cursor for incremental tokenization.
//!
//! This module provides the `LineCursor` struct which walks a single line of
//! source text. Unlike a whole-file cursor, it knows nothing about the lines
//! around it: the host hands the lexer one line at a time and persists
//! everything else in [`LexerState`](crate::LexerState).
//!
//! The cursor tracks two byte offsets: the start of the token being produced
//! and the current read position. Sub-tokenizers may look ahead with
//! [`peek`](LineCursor::peek) and step back with
//! [`unread`](LineCursor::unread), but never behind the token start.

use regex::Regex;

/// A cursor over one line of source text.
///
/// # Example
///
/// ```
/// use vmode_lex::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("fn main()", 4);
/// assert_eq!(cursor.peek(0), Some('f'));
/// cursor.advance();
/// assert_eq!(cursor.peek(0), Some('n'));
/// assert_eq!(cursor.current(), "f");
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    /// The line being traversed, without its line terminator.
    line: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Byte position where the current token starts.
    start: usize,

    /// Width of a tab stop, used for column measurement.
    tab_size: usize,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor at the start of `line`.
    ///
    /// A zero `tab_size` is treated as one column per tab.
    pub fn new(line: &'a str, tab_size: usize) -> Self {
        Self {
            line,
            position: 0,
            start: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// Returns true if nothing has been consumed from the line yet.
    pub fn sol(&self) -> bool {
        self.position == 0
    }

    /// Returns true if the whole line has been consumed.
    pub fn eol(&self) -> bool {
        self.position >= self.line.len()
    }

    /// Returns the character `offset` characters ahead of the read position.
    ///
    /// `peek(0)` is the next character to be consumed. Returns `None` past
    /// the end of the line.
    ///
    /// ```
    /// use vmode_lex::cursor::LineCursor;
    ///
    /// let cursor = LineCursor::new("abc", 4);
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(2), Some('c'));
    /// assert_eq!(cursor.peek(3), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.line[self.position..].chars().nth(offset)
    }

    /// Consumes and returns the next character.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.line[self.position..].chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek(0) == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds. Returns true if any were eaten.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> bool {
        let before = self.position;
        while let Some(c) = self.peek(0) {
            if !pred(c) {
                break;
            }
            self.position += c.len_utf8();
        }
        self.position > before
    }

    /// Consumes a run of whitespace. Returns true if any was eaten.
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Consumes the rest of the line.
    pub fn skip_to_end(&mut self) {
        self.position = self.line.len();
    }

    /// Steps back `count` characters, stopping at the token start.
    ///
    /// Returns the number of characters actually unread.
    ///
    /// ```
    /// use vmode_lex::cursor::LineCursor;
    ///
    /// let mut cursor = LineCursor::new("${x}", 4);
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.unread(5), 2);
    /// assert_eq!(cursor.peek(0), Some('$'));
    /// ```
    pub fn unread(&mut self, count: usize) -> usize {
        let mut unread = 0;
        while unread < count && self.position > self.start {
            let Some(c) = self.line[self.start..self.position].chars().next_back() else {
                break;
            };
            self.position -= c.len_utf8();
            unread += 1;
        }
        unread
    }

    /// Consumes `literal` if the remaining text starts with it.
    pub fn match_str(&mut self, literal: &str) -> bool {
        if self.rest().starts_with(literal) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes the text matched by `pattern` at the read position.
    ///
    /// The pattern must be anchored with `^`; a match that does not begin at
    /// the read position is rejected and nothing is consumed.
    pub fn match_regex(&mut self, pattern: &Regex) -> bool {
        match pattern.find(self.rest()) {
            Some(m) if m.start() == 0 && !m.is_empty() => {
                self.position += m.end();
                true
            },
            _ => false,
        }
    }

    /// Marks the read position as the start of the next token.
    pub fn start_token(&mut self) {
        self.start = self.position;
    }

    /// Returns true if the current token has not consumed anything yet.
    pub fn token_is_empty(&self) -> bool {
        self.position == self.start
    }

    /// Returns the text of the current token.
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.position]
    }

    /// Returns the character immediately before the current token, if any.
    pub fn char_before_token(&self) -> Option<char> {
        self.line[..self.start].chars().next_back()
    }

    /// Returns the unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.line[self.position..]
    }

    /// Returns the full line.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Returns the byte offset of the read position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte offset where the current token starts.
    pub fn token_start(&self) -> usize {
        self.start
    }

    /// Returns the display column where the current token starts.
    ///
    /// Tabs advance to the next multiple of the tab size.
    pub fn column(&self) -> u32 {
        count_column(self.line, self.start, self.tab_size)
    }

    /// Returns the display width of the line's leading whitespace.
    pub fn indentation(&self) -> u32 {
        let end = self.line.len() - self.line.trim_start().len();
        count_column(self.line, end, self.tab_size)
    }
}

/// Measures the display column of byte offset `end` in `text`.
pub fn count_column(text: &str, end: usize, tab_size: usize) -> u32 {
    let tab_size = tab_size.max(1);
    let mut column = 0usize;
    for c in text[..end.min(text.len())].chars() {
        if c == '\t' {
            column += tab_size - (column % tab_size);
        } else {
            column += 1;
        }
    }
    u32::try_from(column).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = LineCursor::new("let x", 4);
        assert!(cursor.sol());
        assert!(!cursor.eol());
        assert_eq!(cursor.peek(0), Some('l'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = LineCursor::new("αβ", 4);
        assert_eq!(cursor.advance(), Some('α'));
        assert_eq!(cursor.advance(), Some('β'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.eol());
    }

    #[test]
    fn test_eat_and_eat_while() {
        let mut cursor = LineCursor::new("==abc1 ", 4);
        assert!(cursor.eat('='));
        assert!(!cursor.eat('x'));
        assert!(cursor.eat_while(|c| c == '='));
        assert!(cursor.eat_while(|c| c.is_alphanumeric()));
        assert_eq!(cursor.current(), "==abc1");
        assert!(!cursor.eat_while(|c| c.is_alphanumeric()));
    }

    #[test]
    fn test_unread_stops_at_token_start() {
        let mut cursor = LineCursor::new("ab cd", 4);
        cursor.advance_n_for_test(3);
        cursor.start_token();
        cursor.advance();
        assert_eq!(cursor.unread(3), 1);
        assert_eq!(cursor.peek(0), Some('c'));
        assert!(cursor.token_is_empty());
    }

    #[test]
    fn test_char_before_token() {
        let mut cursor = LineCursor::new("x.int", 4);
        assert_eq!(cursor.char_before_token(), None);
        cursor.advance_n_for_test(2);
        cursor.start_token();
        assert_eq!(cursor.char_before_token(), Some('.'));
    }

    #[test]
    fn test_match_regex_requires_anchor_at_position() {
        let re = Regex::new(r"^\w+\]").unwrap();
        let mut cursor = LineCursor::new("[inline] fn", 4);
        cursor.advance();
        assert!(cursor.match_regex(&re));
        assert_eq!(cursor.rest(), " fn");

        let unanchored = Regex::new(r"fn").unwrap();
        let mut cursor = LineCursor::new("x fn", 4);
        assert!(!cursor.match_regex(&unanchored));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_match_str() {
        let mut cursor = LineCursor::new("*/ rest", 4);
        assert!(!cursor.match_str("/*"));
        assert!(cursor.match_str("*/"));
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_column_and_indentation_expand_tabs() {
        let mut cursor = LineCursor::new("\t  foo(", 4);
        assert_eq!(cursor.indentation(), 6);
        cursor.eat_space();
        cursor.start_token();
        assert_eq!(cursor.column(), 6);
        cursor.advance_n_for_test(3);
        cursor.start_token();
        assert_eq!(cursor.column(), 9);
    }

    #[test]
    fn test_count_column_mid_tab_stop() {
        assert_eq!(count_column("ab\tc", 3, 4), 4);
        assert_eq!(count_column("abcd\tc", 5, 4), 8);
        assert_eq!(count_column("abc", 100, 4), 3);
    }

    impl LineCursor<'_> {
        fn advance_n_for_test(&mut self, n: usize) {
            for _ in 0..n {
                self.advance();
            }
        }
    }
}
