//! Plain-text rendering of reconciliation output
//!
//! The core leaves inter-slot ordering unspecified, so rendering re-sorts
//! by display key (date, then aircraft, then position) before laying out
//! the table.

use swaplog_core::{ComponentInterval, Diagnostic, Severity};

const HEADERS: [&str; 7] = [
    "DATE",
    "AIRCRAFT",
    "POSITION",
    "SERIAL",
    "ACTIVE UNTIL",
    "SOURCE",
    "NOTE",
];

/// Explicit empty state: a filtered-out view is an answer, not an error
pub const NO_MATCHING_RECORDS: &str = "no matching records";

/// Render intervals as an aligned text table
pub fn render_table(intervals: &[ComponentInterval]) -> String {
    if intervals.is_empty() {
        return NO_MATCHING_RECORDS.to_string();
    }

    let mut sorted: Vec<&ComponentInterval> = intervals.iter().collect();
    sorted.sort_by_key(|i| {
        (
            i.event.occurred_at,
            i.event.aircraft_id.clone(),
            i.event.position.clone(),
        )
    });

    let rows: Vec<[String; 7]> = sorted
        .iter()
        .map(|i| {
            [
                i.event.occurred_at.to_string(),
                i.event.aircraft_id.clone(),
                i.event.position.clone(),
                i.event.serial.clone(),
                i.active_until.to_string(),
                i.event.source.label().to_string(),
                i.event.note.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let format_row = |cells: [&str; 7]| {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            // Pad all but the last column
            if i < cells.len() - 1 {
                for _ in cell.chars().count()..width {
                    line.push(' ');
                }
            }
        }
        line.trim_end().to_string()
    };

    out.push_str(&format_row(HEADERS));
    out.push('\n');
    for row in &rows {
        let cells: [&str; 7] = [
            &row[0], &row[1], &row[2], &row[3], &row[4], &row[5], &row[6],
        ];
        out.push_str(&format_row(cells));
        out.push('\n');
    }
    out.pop();
    out
}

/// One diagnostic line, severity-tagged
pub fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    let tag = match diagnostic.severity {
        Severity::Success => "✓",
        Severity::Warning => "⚠",
        Severity::Error => "✗",
    };
    format!("{} {}: {}", tag, diagnostic.source, diagnostic.message)
}
