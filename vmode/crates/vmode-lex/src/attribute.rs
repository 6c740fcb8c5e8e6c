//! Bracket attribute recognition.
//!
//! V declarations can be preceded by attributes in five shorthand shapes:
//!
//! | shape               | example          |
//! |---------------------|------------------|
//! | bare identifier     | `[unsafe]`       |
//! | single key/value    | `[sql: foo]`     |
//! | several bare keys   | `[sql; foo]`     |
//! | key/value list      | `[a: 1; b: 2]`   |
//! | conditional         | `[if cond ?]`    |
//!
//! The matchers run with the cursor just past the opening `[` and are
//! anchored there. Attributes never span lines, and since the cursor only
//! sees one line a match cannot run past it.

use std::sync::LazyLock;

use regex::Regex;

use crate::cursor::LineCursor;

/// Which attribute shape matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeShape {
    /// `[unsafe]`
    Simple,
    /// `[sql: foo]`
    SingleKeyValue,
    /// `[sql; foo]`
    SeveralKeys,
    /// `[a: 1; b: 2]`
    KeyValueList,
    /// `[if cond ?]`
    Conditional,
}

const NAME: &str = r"[A-Za-z_]\w*";
const VALUE: &str = r#"(?:'[^']*'|"[^"]*"|[\w.\-]+)"#;

static MATCHERS: LazyLock<Vec<(AttributeShape, Regex)>> = LazyLock::new(|| {
    let entry = format!(r"{NAME}(?:\s*:\s*{VALUE})?");
    [
        (AttributeShape::Simple, format!(r"^\s*{NAME}\s*\]")),
        (
            AttributeShape::SingleKeyValue,
            format!(r"^\s*{NAME}\s*:\s*{VALUE}\s*\]"),
        ),
        (
            AttributeShape::SeveralKeys,
            format!(r"^\s*{NAME}(?:\s*;\s*{NAME})+\s*\]"),
        ),
        (
            AttributeShape::KeyValueList,
            format!(r"^\s*{entry}(?:\s*;\s*{entry})+\s*\]"),
        ),
        (AttributeShape::Conditional, r"^\s*if\s+[^\]?]+\?\s*\]".to_string()),
    ]
    .into_iter()
    .map(|(shape, pattern)| {
        let regex = Regex::new(&pattern).expect("attribute patterns are valid regexes");
        (shape, regex)
    })
    .collect()
});

/// Tries each attribute shape in order at the cursor.
///
/// On a match the attribute text, including the closing `]`, is consumed and
/// its shape returned. Otherwise the cursor is left where it was.
///
/// ```
/// use vmode_lex::attribute::{match_attribute, AttributeShape};
/// use vmode_lex::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("[sql: users]", 4);
/// cursor.advance();
/// assert_eq!(match_attribute(&mut cursor), Some(AttributeShape::SingleKeyValue));
/// assert!(cursor.eol());
/// ```
pub fn match_attribute(cursor: &mut LineCursor<'_>) -> Option<AttributeShape> {
    MATCHERS
        .iter()
        .find(|(_, regex)| cursor.match_regex(regex))
        .map(|(shape, _)| *shape)
}
