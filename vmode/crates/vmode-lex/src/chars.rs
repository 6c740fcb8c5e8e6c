//! Character classes used by the V tokenizer.

/// Checks if a character belongs to an identifier run.
///
/// Identifier runs are deliberately loose: ASCII word characters, `$`, and
/// every non-ASCII character from U+00A1 upward. The loose class keeps
/// compile-time names (`$if`) and non-Latin identifiers in one token.
///
/// ```
/// use vmode_lex::chars::is_ident_char;
///
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('_'));
/// assert!(is_ident_char('9'));
/// assert!(is_ident_char('$'));
/// assert!(is_ident_char('λ'));
/// assert!(!is_ident_char('.'));
/// assert!(!is_ident_char(' '));
/// ```
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c >= '\u{a1}'
}

/// Checks if a character may start an identifier.
///
/// ```
/// use vmode_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('x'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('é'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('$'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character continues a short `$name` interpolation.
///
/// Unlike [`is_ident_char`], `$` is excluded: `"$a$b"` holds two
/// interpolations.
pub fn is_short_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character can appear in an operator run.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '&' | '^' | '%' | ':' | '=' | '<' | '>' | '!' | '?' | '|' | '/'
    )
}

/// Checks if a character is structural punctuation.
///
/// Punctuation yields no classification; the host adapter uses it to drive
/// the context stack.
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '[' | ']' | '{' | '}' | '(' | ')' | ',' | ';' | ':' | '.')
}

/// Checks if `c` may follow a backslash inside an interpolated string.
pub fn is_valid_escape_char(c: char) -> bool {
    matches!(c, 'n' | 't' | 'r' | '\\' | '"' | '\'' | '0')
}
