//! Row parsing for the fetched sheet source
//!
//! Columns are resolved positionally, not by header name: the real export's
//! header labels are inconsistent across samples, so the expected layout is
//! an explicit configuration structure instead. [`SheetLayout`] documents
//! the contract; changing the export means changing the layout, never
//! guessing from headers.

use chrono::NaiveDate;

use crate::error::Error;
use crate::model::{ComponentEvent, Diagnostic, SourceKind};
use crate::normalize;

/// Positional column layout of the fetched sheet export
///
/// Column 0 is the form-submission timestamp and is discarded: it records
/// when the row was entered, not when the swap happened. The five semantic
/// columns follow, then up to three optional trailing columns.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    /// Swap date (parsed day-first)
    pub date: usize,
    /// Aircraft tail number
    pub aircraft: usize,
    /// Slot within the aircraft
    pub position: usize,
    /// Part serial number
    pub serial: usize,
    /// Free-text note
    pub note: usize,
    /// Optional work-order id
    pub work_order: usize,
    /// Optional fault request id
    pub fault_request: usize,
    /// Optional corrective action text
    pub corrective_action: usize,
}

impl SheetLayout {
    /// Minimum column count for a usable source: timestamp + five semantic
    /// columns. A narrower source is rejected wholesale.
    pub const MIN_COLUMNS: usize = 6;

    /// Columns a row must actually have for this layout; the optional
    /// trailing columns are not counted
    fn required_columns(&self) -> usize {
        let last_semantic = self
            .date
            .max(self.aircraft)
            .max(self.position)
            .max(self.serial)
            .max(self.note);
        (last_semantic + 1).max(Self::MIN_COLUMNS)
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            date: 1,
            aircraft: 2,
            position: 3,
            serial: 4,
            note: 5,
            work_order: 6,
            fault_request: 7,
            corrective_action: 8,
        }
    }
}

/// Date-entry convention of a source
///
/// The sheet is filled in day-first; the seed table uses explicit ISO dates.
/// Each source is parsed with its own rule; a single auto-detect heuristic
/// would silently misread dates like 03/04/2025 for one source or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateConvention {
    /// `DD/MM/YYYY` (sheet entries)
    DayFirst,
    /// `YYYY-MM-DD` (seed table)
    YearFirst,
}

impl DateConvention {
    /// Parse a date string under this convention; `None` if it does not
    /// name a real calendar date
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let fmt = match self {
            DateConvention::DayFirst => "%d/%m/%Y",
            DateConvention::YearFirst => "%Y-%m-%d",
        };
        NaiveDate::parse_from_str(raw.trim(), fmt).ok()
    }
}

/// Result of parsing one source
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Rows converted to the uniform record shape, in source order
    pub events: Vec<ComponentEvent>,
    /// Rows dropped because their date failed to parse
    pub rejected: usize,
    /// Ingestion outcome messages for the host
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert raw sheet rows into uniform events
///
/// A source narrower than [`SheetLayout::MIN_COLUMNS`] is rejected wholesale
/// with a schema diagnostic. Rows with unparseable dates are dropped and
/// counted once per source, never reported per-row.
pub fn parse_sheet_rows(rows: &[Vec<String>], layout: &SheetLayout) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    if rows.is_empty() {
        outcome
            .diagnostics
            .push(Diagnostic::success("sheet", "no rows fetched"));
        return outcome;
    }

    // Schema check on the narrowest record: one short row means the export
    // layout no longer matches the configured positions.
    let required = layout.required_columns();
    let narrowest = rows.iter().map(Vec::len).min().unwrap_or(0);
    if narrowest < required {
        tracing::warn!(
            expected = required,
            actual = narrowest,
            "sheet source rejected: too few columns"
        );
        outcome.rejected = rows.len();
        let cause = Error::SchemaMismatch {
            expected: required,
            actual: narrowest,
        };
        outcome
            .diagnostics
            .push(Diagnostic::error("sheet", format!("source rejected: {}", cause)));
        return outcome;
    }

    for row in rows {
        let Some(occurred_at) = DateConvention::DayFirst.parse(&row[layout.date]) else {
            outcome.rejected += 1;
            continue;
        };

        let (aircraft_id, position) =
            normalize::normalize(&row[layout.aircraft], &row[layout.position]);

        outcome.events.push(ComponentEvent {
            occurred_at,
            aircraft_id,
            position,
            serial: row[layout.serial].trim().to_string(),
            note: row[layout.note].trim().to_string(),
            work_order: optional_column(row, layout.work_order),
            fault_request: optional_column(row, layout.fault_request),
            corrective_action: optional_column(row, layout.corrective_action),
            source: SourceKind::Sheet,
        });
    }

    tracing::debug!(
        parsed = outcome.events.len(),
        rejected = outcome.rejected,
        "parsed sheet rows"
    );

    if outcome.rejected > 0 {
        outcome.diagnostics.push(Diagnostic::warning(
            "sheet",
            format!(
                "dropped {} row(s) with unparseable dates",
                outcome.rejected
            ),
        ));
    }
    outcome.diagnostics.push(Diagnostic::success(
        "sheet",
        format!("loaded {} row(s)", outcome.events.len()),
    ));

    outcome
}

/// Optional trailing column: absent or blank means "not provided"
fn optional_column(row: &[String], index: usize) -> Option<String> {
    row.get(index)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
