//! Plain-text rendering of report tables.

use codecountlib::{Diagnostic, Report, ReportTable};
use console::Style;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Per-file table: name | count | type
const FILE_ALIGN: [Align; 3] = [Align::Left, Align::Right, Align::Left];
/// Summary table: category | count | percentage
const SUMMARY_ALIGN: [Align; 3] = [Align::Left, Align::Right, Align::Right];

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", text, width = width),
        Align::Right => format!("{:>width$}", text, width = width),
    }
}

/// Render one table with a bold header and dashed separators.
///
/// Cells are padded before styling so escape codes never affect alignment.
pub fn render_table(table: &ReportTable, align: &[Align]) -> String {
    let widths = table.column_widths();
    let header_style = Style::new().bold();
    let align_of = |i: usize| align.get(i).copied().unwrap_or(Align::Left);

    let gutters = 3 * widths.len().saturating_sub(1);
    let separator = "-".repeat(widths.iter().sum::<usize>() + gutters);

    let header: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            header_style
                .apply_to(pad(h, widths[i], align_of(i)))
                .to_string()
        })
        .collect();

    let mut output = String::new();
    output.push_str(&header.join(" | "));
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = std::iter::once(&row.label)
            .chain(row.values.iter())
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i], align_of(i)))
            .collect();
        output.push_str(cells.join(" | ").trim_end());
        output.push('\n');
    }

    output.push_str(&separator);
    output.push('\n');
    output
}

/// Render the requested tables followed by the total line.
pub fn render_report(report: &Report) -> String {
    let mut output = String::new();

    if let Some(ref files) = report.files {
        output.push_str(&render_table(files, &FILE_ALIGN));
        output.push('\n');
    }
    if let Some(ref summary) = report.summary {
        output.push_str(&render_table(summary, &SUMMARY_ALIGN));
        output.push('\n');
    }

    output.push_str(&Style::new().bold().apply_to(&report.total_line).to_string());
    output.push('\n');
    output
}

/// Format a diagnostic for stderr.
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    format!(
        "{} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        diagnostic
    )
}
