use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::app::{ReplaceRange, Suggestion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Serialize)]
struct CompletionOutput<'a> {
    replace_range: ReplaceRange,
    suggestions: &'a [Suggestion],
}

pub fn render(
    out: &mut impl Write,
    format: OutputFormat,
    suggestions: &[Suggestion],
    range: ReplaceRange,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => render_table(out, suggestions, range),
        OutputFormat::Json => render_json(out, suggestions, range),
    }
}

fn render_table(
    out: &mut impl Write,
    suggestions: &[Suggestion],
    range: ReplaceRange,
) -> io::Result<()> {
    let label_width = suggestions
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("LABEL".len());

    writeln!(out, "{:<label_width$}  {:<8}  DETAIL", "LABEL", "KIND")?;
    for s in suggestions {
        writeln!(
            out,
            "{:<label_width$}  {:<8}  {}",
            s.label,
            s.category.as_str(),
            s.detail
        )?;
    }
    writeln!(
        out,
        "replace: line {} columns {}..{}",
        range.line, range.start_column, range.end_column
    )
}

fn render_json(
    out: &mut impl Write,
    suggestions: &[Suggestion],
    range: ReplaceRange,
) -> io::Result<()> {
    let payload = CompletionOutput {
        replace_range: range,
        suggestions,
    };
    serde_json::to_writer_pretty(&mut *out, &payload)?;
    writeln!(out)
}
