//! Highlight command implementation.
//!
//! Tokenizes a V source file and renders the classified spans as colored
//! text, a span listing, or JSON.

use std::fmt::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};
use vmode_lex::{highlight, Classification, LineTokens, Mode, ModeConfig};

use crate::commands::common::{read_source, style_for, OutputFormat};
use crate::commands::traits::{print_output, Command};
use crate::error::Result;

/// Arguments for the highlight command.
#[derive(Debug, Clone)]
pub struct HighlightArgs {
    /// Source file, or `-` for standard input.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Color ANSI output.
    pub color: bool,
    /// Lexer settings.
    pub mode: ModeConfig,
}

/// Highlight command handler.
pub struct HighlightCommand {
    args: HighlightArgs,
}

/// One span as written by the JSON format.
#[derive(Debug, Serialize)]
struct JsonSpan<'a> {
    start: usize,
    end: usize,
    class: Classification,
    text: &'a str,
}

/// One line as written by the JSON format.
#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    line: usize,
    spans: Vec<JsonSpan<'a>>,
}

impl HighlightCommand {
    /// Highlight `source` and render it in the requested format.
    pub fn render(&self, source: &str) -> Result<String> {
        let mode = Mode::new(self.args.mode)?;
        let lines = highlight(&mode, source);
        let span_count: usize = lines.iter().map(|l| l.spans.len()).sum();
        debug!(lines = lines.len(), spans = span_count, "highlighted");

        match self.args.format {
            OutputFormat::Ansi => Ok(render_ansi(source, &lines, self.args.color)),
            OutputFormat::Spans => Ok(render_spans(source, &lines)),
            OutputFormat::Json => render_json(source, &lines),
        }
    }
}

/// Write every line with its spans painted and the gaps left plain.
fn render_ansi(source: &str, lines: &[LineTokens], color: bool) -> String {
    let mut out = String::with_capacity(source.len());
    for (text, tokens) in source.lines().zip(lines) {
        if !color {
            out.push_str(text);
            out.push('\n');
            continue;
        }
        let mut pos = 0;
        for span in &tokens.spans {
            out.push_str(&text[pos..span.start]);
            let _ = write!(out, "{}", style_for(span.class).paint(&text[span.start..span.end]));
            pos = span.end;
        }
        out.push_str(&text[pos..]);
        out.push('\n');
    }
    out
}

/// Write one `line:start-end<TAB>class<TAB>text` row per span, lines 1-based.
fn render_spans(source: &str, lines: &[LineTokens]) -> String {
    let mut out = String::new();
    for (text, tokens) in source.lines().zip(lines) {
        for span in &tokens.spans {
            let _ = writeln!(
                out,
                "{}:{}-{}\t{}\t{}",
                tokens.line + 1,
                span.start,
                span.end,
                span.class,
                &text[span.start..span.end]
            );
        }
    }
    out
}

fn render_json(source: &str, lines: &[LineTokens]) -> Result<String> {
    let json: Vec<JsonLine<'_>> = source
        .lines()
        .zip(lines)
        .map(|(text, tokens)| JsonLine {
            line: tokens.line + 1,
            spans: tokens
                .spans
                .iter()
                .map(|span| JsonSpan {
                    start: span.start,
                    end: span.end,
                    class: span.class,
                    text: &text[span.start..span.end],
                })
                .collect(),
        })
        .collect();

    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}

impl Command for HighlightCommand {
    type Args = HighlightArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        info!(input = %self.args.input.display(), format = self.args.format.as_str(), "highlighting");
        let source = read_source(&self.args.input)?;
        self.render(&source)
    }

    fn name() -> &'static str {
        "highlight"
    }
}

/// Run the highlight command.
pub fn run_highlight(args: HighlightArgs) -> Result<()> {
    print_output(&HighlightCommand::new(args))
}
