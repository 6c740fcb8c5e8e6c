//! Indentation calculation.
//!
//! Given the state after the previous line and the text of the line being
//! indented, suggests the column the line should start at.

use crate::context::BracketKind;
use crate::state::LexerState;

/// Computes the indentation for a line whose text is `text_after`.
///
/// Inside a bracket the line either hangs one `indent_unit` past the
/// indentation of the line that opened it, or, when code followed the opener
/// on its own line, aligns one column past the opener. A line that starts by
/// closing the bracket lines up with the opener's line or the opener itself.
/// Returns 0 at the root and while a string or comment is open.
pub fn compute_indent(state: &LexerState, text_after: &str, indent_unit: u32) -> u32 {
    if state.tokenize.is_mid_construct() {
        return 0;
    }
    let ctx = state.context();
    if ctx.kind == BracketKind::Top {
        return 0;
    }

    let closing = text_after
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| ctx.kind.is_closed_by(c));

    if ctx.align == Some(true) {
        ctx.open_column + if closing { 0 } else { 1 }
    } else {
        ctx.indent_column + if closing { 0 } else { indent_unit }
    }
}
