//! Classification labels produced by the tokenizer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The syntactic role of a classified span.
///
/// The host maps each label to a display style; the lexer itself defines no
/// styles. The string form of each variant is its kebab-case tag, e.g.
/// `Classification::ImportName` is `"import-name"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// Reserved word or pseudo-keyword.
    Keyword,
    /// Built-in constant or function-like name (`true`, `nil`, `println`).
    Atom,
    /// Compiler directive such as `#flag`.
    HashDirective,
    /// Built-in primitive type name.
    Builtin,
    /// Capitalized identifier.
    Type,
    /// Identifier followed by a call or generic argument list.
    Function,
    /// Imported module name.
    ImportName,
    /// Identifier after a `.`.
    Property,
    /// Any other identifier.
    Variable,
    /// Operator run or member-access dot.
    Operator,
    /// Numeric literal.
    Number,
    /// String literal text.
    String,
    /// Line or block comment.
    Comment,
    /// Bracketed declaration attribute.
    Attribute,
    /// `@name` reference.
    AtIdentifier,
    /// `$name` compile-time reference.
    CompileTimeIdentifier,
    /// `${` or `$` opening an interpolation.
    StartInterpolation,
    /// `}` closing a long interpolation.
    EndInterpolation,
    /// Recognized two-character escape sequence.
    ValidEscape,
}

impl Classification {
    /// All labels, in declaration order.
    pub const ALL: [Classification; 19] = [
        Classification::Keyword,
        Classification::Atom,
        Classification::HashDirective,
        Classification::Builtin,
        Classification::Type,
        Classification::Function,
        Classification::ImportName,
        Classification::Property,
        Classification::Variable,
        Classification::Operator,
        Classification::Number,
        Classification::String,
        Classification::Comment,
        Classification::Attribute,
        Classification::AtIdentifier,
        Classification::CompileTimeIdentifier,
        Classification::StartInterpolation,
        Classification::EndInterpolation,
        Classification::ValidEscape,
    ];

    /// Returns the tag the host uses to look up a style.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Atom => "atom",
            Self::HashDirective => "hash-directive",
            Self::Builtin => "builtin",
            Self::Type => "type",
            Self::Function => "function",
            Self::ImportName => "import-name",
            Self::Property => "property",
            Self::Variable => "variable",
            Self::Operator => "operator",
            Self::Number => "number",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Attribute => "attribute",
            Self::AtIdentifier => "at-identifier",
            Self::CompileTimeIdentifier => "compile-time-identifier",
            Self::StartInterpolation => "start-interpolation",
            Self::EndInterpolation => "end-interpolation",
            Self::ValidEscape => "valid-escape",
        }
    }

    /// Parses a tag produced by [`as_str`](Self::as_str).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
