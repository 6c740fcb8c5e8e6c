//! Bracket context stack.
//!
//! Every open `(`, `[` or `{` gets a [`Context`] recording where it opened and
//! how the lines inside it should be indented. Contexts live in an arena owned
//! by [`ContextStack`] and point at their parent by [`ContextId`]; the root
//! context (kind [`BracketKind::Top`]) is always present and never popped.
//!
//! Import names seen after `import` go into one append-only set held by the
//! stack. Every context sees it, so a package imported at the top of a file
//! is recognized inside every nested block, and cloning the stack snapshots
//! it along with the contexts.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::state::Quote;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            /// Returns the arena slot of this id.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_id!(
    /// Arena index of a [`Context`].
    ContextId
);


/// The closer a context is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// The document root. Never closed.
    Top,
    /// Opened by `(`, closed by `)`.
    Paren,
    /// Opened by `[`, closed by `]`.
    Bracket,
    /// Opened by `{`, closed by `}`.
    Brace,
}

impl BracketKind {
    /// Maps an opening bracket to the context kind it creates.
    pub fn for_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Bracket),
            '{' => Some(Self::Brace),
            _ => None,
        }
    }

    /// Returns the character that closes this context.
    pub fn closing_char(self) -> Option<char> {
        match self {
            Self::Top => None,
            Self::Paren => Some(')'),
            Self::Bracket => Some(']'),
            Self::Brace => Some('}'),
        }
    }

    /// Returns true if `c` closes this context.
    pub fn is_closed_by(self, c: char) -> bool {
        self.closing_char() == Some(c)
    }

    /// Returns the host-facing name: `"top"` or the closing character.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Paren => ")",
            Self::Bracket => "]",
            Self::Brace => "}",
        }
    }
}

/// One open bracket scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Indentation of the line on which this context was pushed.
    pub indent_column: u32,

    /// Column of the character that opened this context.
    pub open_column: u32,

    /// The closer this context waits for.
    pub kind: BracketKind,

    /// Whether continuation lines align to `open_column`. `None` until the
    /// first token or line break after the opener decides it.
    pub align: Option<bool>,

    /// The enclosing context. `None` only for the root.
    pub parent: Option<ContextId>,

    /// Set after `import`, cleared once the last path segment is consumed.
    pub expecting_import_name: bool,

    /// Quotes of the strings currently open in this scope, innermost last.
    ///
    /// A string opened inside `${ }` pushes its quote here and pops it when
    /// it closes, restoring the enclosing string's quote.
    string_quotes: Vec<Quote>,
}

impl Context {
    fn new(
        indent_column: u32,
        open_column: u32,
        kind: BracketKind,
        parent: Option<ContextId>,
    ) -> Self {
        Self {
            indent_column,
            open_column,
            kind,
            align: None,
            parent,
            expecting_import_name: false,
            string_quotes: Vec::new(),
        }
    }

    /// Returns true while a string body owns this scope.
    pub fn inside_string(&self) -> bool {
        !self.string_quotes.is_empty()
    }

    /// Returns the quote of the innermost open string.
    ///
    /// `Some` exactly when [`inside_string`](Self::inside_string) is true.
    pub fn active_quote(&self) -> Option<Quote> {
        self.string_quotes.last().copied()
    }

    /// Records that a string delimited by `quote` has opened.
    pub fn enter_string(&mut self, quote: Quote) {
        self.string_quotes.push(quote);
    }

    /// Records that the innermost string has closed.
    pub fn leave_string(&mut self) -> Option<Quote> {
        self.string_quotes.pop()
    }
}

/// Arena-backed stack of bracket contexts.
///
/// The live stack is the parent chain starting at [`top`](Self::top). Slots
/// above the top are unlinked contexts; they are left untouched until the
/// next push reclaims them.
#[derive(Debug, Clone)]
pub struct ContextStack {
    nodes: Vec<Context>,
    imports: FxHashSet<String>,
    top: ContextId,
}

impl ContextStack {
    /// Creates a stack holding only the root context and no imports.
    pub fn new() -> Self {
        Self {
            nodes: vec![Context::new(0, 0, BracketKind::Top, None)],
            imports: FxHashSet::default(),
            top: ContextId::from_usize(0),
        }
    }

    /// Returns the id of the innermost context.
    pub fn top_id(&self) -> ContextId {
        self.top
    }

    /// Returns the innermost context.
    pub fn top(&self) -> &Context {
        &self.nodes[self.top.index()]
    }

    /// Returns the innermost context mutably.
    pub fn top_mut(&mut self) -> &mut Context {
        &mut self.nodes[self.top.index()]
    }

    /// Looks up a context by id, including unlinked ones not yet reclaimed.
    pub fn get(&self, id: ContextId) -> Option<&Context> {
        self.nodes.get(id.index())
    }

    /// Returns true if only the root context is open.
    pub fn is_root(&self) -> bool {
        self.top().kind == BracketKind::Top
    }

    /// Returns the number of open contexts, counting the root.
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Iterates from the innermost context out to the root.
    pub fn iter(&self) -> impl Iterator<Item = &Context> + '_ {
        let mut next = Some(self.top);
        std::iter::from_fn(move || {
            let id = next?;
            let ctx = &self.nodes[id.index()];
            next = ctx.parent;
            Some(ctx)
        })
    }

    /// Opens a context for `kind` and makes it the top.
    ///
    pub fn push(&mut self, indent_column: u32, open_column: u32, kind: BracketKind) -> ContextId {
        // every slot above the top is unreachable now
        self.nodes.truncate(self.top.index() + 1);
        let parent = self.top;
        let id = ContextId::from_usize(self.nodes.len());
        self.nodes
            .push(Context::new(indent_column, open_column, kind, Some(parent)));
        self.top = id;
        trace!(kind = kind.as_str(), open_column, depth = self.depth(), "push context");
        id
    }

    /// Unlinks the top context and returns it.
    ///
    /// Returns `None` and leaves the stack unchanged at the root. The popped
    /// context itself is not modified.
    pub fn pop(&mut self) -> Option<&Context> {
        let popped = self.top;
        let parent = self.nodes[popped.index()].parent?;
        self.top = parent;
        trace!(
            kind = self.nodes[popped.index()].kind.as_str(),
            depth = self.depth(),
            "pop context"
        );
        Some(&self.nodes[popped.index()])
    }

    /// Forgets every open string in the live stack.
    pub fn abandon_strings(&mut self) {
        let mut next = Some(self.top);
        while let Some(id) = next {
            let ctx = &mut self.nodes[id.index()];
            ctx.string_quotes.clear();
            next = ctx.parent;
        }
    }

    /// Returns true if `name` has been imported.
    pub fn knows_import(&self, name: &str) -> bool {
        self.imports.contains(name)
    }

    /// Records an imported package name.
    pub fn add_import(&mut self, name: &str) {
        if !self.imports.contains(name) {
            self.imports.insert(name.to_string());
        }
    }

    /// Returns every imported package name.
    pub fn imports(&self) -> impl Iterator<Item = &str> + '_ {
        self.imports.iter().map(String::as_str)
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}
