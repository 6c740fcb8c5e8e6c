//! Whole-line and whole-document drivers.
//!
//! These run [`Mode::token`] the way an editor would and collect the
//! classified byte ranges, for hosts that want spans rather than a
//! call-per-token interface.

use serde::Serialize;

use crate::classification::Classification;
use crate::cursor::LineCursor;
use crate::mode::Mode;
use crate::state::LexerState;

/// A classified byte range within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// How the range is highlighted.
    pub class: Classification,
}

/// The spans of one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    /// Zero-based line number.
    pub line: usize,
    /// Classified ranges in order. Unclassified text has no span.
    pub spans: Vec<Span>,
}

/// Tokenizes `line` to its end, continuing from `state`.
///
/// Empty lines produce no calls, so `state` passes through them unchanged.
pub fn highlight_line(mode: &Mode, line: &str, state: &mut LexerState) -> Vec<Span> {
    let mut cursor = LineCursor::new(line, mode.config().tab_size as usize);
    let mut spans = Vec::new();

    while !cursor.eol() {
        let start = cursor.position();
        let class = mode.token(&mut cursor, state);
        let end = cursor.position();
        if end == start {
            break;
        }
        if let Some(class) = class {
            spans.push(Span { start, end, class });
        }
    }
    spans
}

/// Tokenizes a whole document from a fresh state.
pub fn highlight(mode: &Mode, source: &str) -> Vec<LineTokens> {
    let mut state = mode.start_state();
    source
        .lines()
        .enumerate()
        .map(|(line, text)| LineTokens {
            line,
            spans: highlight_line(mode, text, &mut state),
        })
        .collect()
}

/// Suggests an indentation column for every line of `source`.
///
/// Each line is indented from the state left by the lines above it.
pub fn indent_lines(mode: &Mode, source: &str) -> Vec<u32> {
    let mut state = mode.start_state();
    source
        .lines()
        .map(|text| {
            let column = mode.indent(&state, text);
            highlight_line(mode, text, &mut state);
            column
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::*;

    fn texts<'a>(line: &'a str, spans: &[Span]) -> Vec<(&'a str, Classification)> {
        spans.iter().map(|s| (&line[s.start..s.end], s.class)).collect()
    }

    #[test]
    fn test_highlight_line() {
        let mode = Mode::default();
        let mut state = mode.start_state();
        let line = "x := 0xFF + 1_000";
        let spans = highlight_line(&mode, line, &mut state);
        assert_eq!(
            texts(line, &spans),
            vec![("x", Variable), ("=", Operator), ("0xFF", Number), ("+", Operator), ("1_000", Number)]
        );
    }

    #[test]
    fn test_spans_are_ordered_and_disjoint() {
        let mode = Mode::default();
        let source = "fn main() {\n\tprintln('hi ${name}!')\n}\n";
        for line in highlight(&mode, source) {
            for pair in line.spans.windows(2) {
                assert!(pair[0].end <= pair[1].start);
            }
            assert!(line.spans.iter().all(|s| s.start < s.end));
        }
    }

    #[test]
    fn test_highlight_document_carries_state() {
        let mode = Mode::default();
        let lines = highlight(&mode, "/* a\nb */ c");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0], Span { start: 0, end: 4, class: Comment });
        assert_eq!(lines[1].spans[1].class, Variable);
    }

    #[test]
    fn test_empty_lines_pass_through() {
        let mode = Mode::default();
        let lines = highlight(&mode, "/* a\n\nb */");
        assert!(lines[1].spans.is_empty());
        assert_eq!(lines[2].spans[0].class, Comment);
    }

    #[test]
    fn test_indent_lines() {
        let mode = Mode::default();
        let source = "fn main() {\n    x := 1\n    if x {\n        y()\n    }\n}";
        assert_eq!(indent_lines(&mode, source), vec![0, 4, 4, 8, 4, 0]);
    }

    #[test]
    fn test_indent_lines_aligned_call() {
        let mode = Mode::default();
        let source = "foo(a,\nb)";
        assert_eq!(indent_lines(&mode, source), vec![0, 4]);
    }
}
