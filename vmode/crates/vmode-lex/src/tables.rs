//! Static classification tables for V identifiers.
//!
//! Each table is built once on first use and never changes afterwards. The
//! tables are disjoint: a word appears in at most one of them.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Fully reserved V keywords.
pub const KEYWORDS: &[&str] = &[
    "as",
    "asm",
    "assert",
    "atomic",
    "break",
    "const",
    "continue",
    "defer",
    "else",
    "enum",
    "fn",
    "for",
    "go",
    "goto",
    "if",
    "import",
    "in",
    "interface",
    "is",
    "isreftype",
    "lock",
    "match",
    "module",
    "mut",
    "none",
    "or",
    "pub",
    "return",
    "rlock",
    "select",
    "shared",
    "sizeof",
    "static",
    "struct",
    "spawn",
    "type",
    "typeof",
    "union",
    "unsafe",
    "volatile",
    "__global",
    "__offsetof",
];

/// Contextual keywords that are not fully reserved.
pub const PSEUDO_KEYWORDS: &[&str] = &["sql", "chan", "thread"];

/// Compiler directives, including their leading `#`.
pub const HASH_DIRECTIVES: &[&str] = &["#flag", "#include", "#pkgconfig", "#define"];

/// Built-in constants and function-like names.
pub const ATOMS: &[&str] = &[
    "true", "false", "nil", "print", "println", "eprintln", "eprint", "exit", "panic", "error",
    "dump",
];

/// Built-in primitive type names.
pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "string", "i8", "i16", "int", "i32", "i64", "i128", "u8", "u16", "u32", "u64", "u128",
    "rune", "f32", "f64", "isize", "usize", "voidptr", "any", "byteptr", "char",
];

/// An immutable word set with O(1) expected lookup.
pub struct WordTable {
    words: FxHashSet<&'static str>,
}

impl WordTable {
    fn new(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Returns true if `name` is in the table.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

static KEYWORD_TABLE: LazyLock<WordTable> = LazyLock::new(|| WordTable::new(KEYWORDS));
static PSEUDO_KEYWORD_TABLE: LazyLock<WordTable> =
    LazyLock::new(|| WordTable::new(PSEUDO_KEYWORDS));
static HASH_DIRECTIVE_TABLE: LazyLock<WordTable> =
    LazyLock::new(|| WordTable::new(HASH_DIRECTIVES));
static ATOM_TABLE: LazyLock<WordTable> = LazyLock::new(|| WordTable::new(ATOMS));
static BUILTIN_TYPE_TABLE: LazyLock<WordTable> = LazyLock::new(|| WordTable::new(BUILTIN_TYPES));

/// The reserved keyword table.
pub fn keywords() -> &'static WordTable {
    &KEYWORD_TABLE
}

/// The pseudo-keyword table.
pub fn pseudo_keywords() -> &'static WordTable {
    &PSEUDO_KEYWORD_TABLE
}

/// The hash directive table.
pub fn hash_directives() -> &'static WordTable {
    &HASH_DIRECTIVE_TABLE
}

/// The literal atom table.
pub fn atoms() -> &'static WordTable {
    &ATOM_TABLE
}

/// The built-in type table.
pub fn builtin_types() -> &'static WordTable {
    &BUILTIN_TYPE_TABLE
}
