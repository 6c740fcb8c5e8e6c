//! Indent command implementation.
//!
//! Reports the indentation the mode suggests for each line of a V source
//! file, or rewrites the file with it.

use std::fmt::Write;
use std::path::PathBuf;

use tracing::info;
use vmode_lex::{highlight_line, indent_lines, Mode, ModeConfig};

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::{print_output, Command};
use crate::error::{Result, VmodetError};

/// Arguments for the indent command.
#[derive(Debug, Clone)]
pub struct IndentArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Only report this line (1-based).
    pub line: Option<usize>,
    /// Print the re-indented source instead of the columns.
    pub apply: bool,
    /// Lexer settings.
    pub mode: ModeConfig,
}

/// Indent command handler.
pub struct IndentCommand {
    args: IndentArgs,
}

impl IndentCommand {
    /// Compute indentation for `source` and render the report.
    pub fn render(&self, source: &str) -> Result<String> {
        let mode = Mode::new(self.args.mode)?;
        if self.args.apply {
            return Ok(reindent(&mode, source));
        }

        let columns = indent_lines(&mode, source);
        let mut out = String::new();
        match self.args.line {
            Some(line) => {
                let column = line
                    .checked_sub(1)
                    .and_then(|index| columns.get(index))
                    .ok_or_else(|| {
                        VmodetError::Input(format!("{}: {}", error_messages::LINE_OUT_OF_RANGE, line))
                    })?;
                let _ = writeln!(out, "{}", column);
            }
            None => {
                for (index, column) in columns.iter().enumerate() {
                    let _ = writeln!(out, "{}\t{}", index + 1, column);
                }
            }
        }
        Ok(out)
    }
}

/// Re-indent every line with spaces, leaving blank lines and lines that
/// continue a string or comment untouched.
///
/// Each line is tokenized as rewritten, so the brackets it opens record the
/// new indentation.
fn reindent(mode: &Mode, source: &str) -> String {
    let mut state = mode.start_state();
    let mut out = String::with_capacity(source.len());

    for text in source.lines() {
        let content = text.trim_start();
        let line = if content.is_empty() || state.tokenize.is_mid_construct() {
            text.to_string()
        } else {
            let column = mode.indent(&state, content) as usize;
            format!("{}{}", " ".repeat(column), content)
        };
        highlight_line(mode, &line, &mut state);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

impl Command for IndentCommand {
    type Args = IndentArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        info!(input = %self.args.input.display(), "computing indentation");
        let source = read_source(&self.args.input)?;
        self.render(&source)
    }

    fn name() -> &'static str {
        "indent"
    }
}

/// Run the indent command.
pub fn run_indent(args: IndentArgs) -> Result<()> {
    print_output(&IndentCommand::new(args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: Option<usize>, apply: bool) -> IndentCommand {
        IndentCommand::new(IndentArgs {
            input: PathBuf::from("-"),
            line,
            apply,
            mode: ModeConfig::default(),
        })
    }

    const SOURCE: &str = "fn main() {\n    x := foo(a,\n             b)\n}\n";

    #[test]
    fn test_report_all_lines() {
        let out = command(None, false).render(SOURCE).unwrap();
        assert_eq!(out, "1\t0\n2\t4\n3\t13\n4\t0\n");
    }

    #[test]
    fn test_report_one_line() {
        assert_eq!(command(Some(3), false).render(SOURCE).unwrap(), "13\n");
    }

    #[test]
    fn test_line_out_of_range() {
        assert!(matches!(
            command(Some(9), false).render(SOURCE),
            Err(VmodetError::Input(_))
        ));
        assert!(command(Some(0), false).render(SOURCE).is_err());
    }

    #[test]
    fn test_apply_reindents() {
        let source = "fn main() {\nif x {\ny()\n}\n\n}\n";
        let out = command(None, true).render(source).unwrap();
        assert_eq!(out, "fn main() {\n    if x {\n        y()\n    }\n\n}\n");
    }

    #[test]
    fn test_apply_keeps_comment_lines() {
        let source = "fn f() {\n/* a\n   b */\n}\n";
        let out = command(None, true).render(source).unwrap();
        assert_eq!(out, "fn f() {\n    /* a\n   b */\n}\n");
    }
}
