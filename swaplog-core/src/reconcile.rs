//! One-pass reconciliation
//!
//! Orchestrates the pipeline: seed load, sheet fetch, parse, merge, derive.
//! Every external failure degrades to "fewer rows plus a diagnostic": the
//! pass always produces a usable (possibly seed-only, possibly empty)
//! report for the presentation layer.

use chrono::NaiveDate;

use crate::error::Result;
use crate::fetch::{FetchError, SheetSource};
use crate::filter::{filter_intervals, FilterCriteria};
use crate::intervals::derive_intervals;
use crate::merge::merge;
use crate::model::{ComponentEvent, ComponentInterval, Diagnostic};
use crate::parse::{parse_sheet_rows, SheetLayout};
use crate::seed::SeedTable;

/// Output of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReconcileReport {
    /// The canonical merged event log
    pub events: Vec<ComponentEvent>,
    /// Derived occupancy intervals (read-only view of `events`)
    pub intervals: Vec<ComponentInterval>,
    /// Per-source ingestion outcomes, for the host to render as-is
    pub diagnostics: Vec<Diagnostic>,
}

impl ReconcileReport {
    /// Project the derived intervals through presentation criteria
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<ComponentInterval> {
        filter_intervals(&self.intervals, criteria)
    }
}

/// The reconciliation pipeline over a seed table and an optional sheet
///
/// `sheet: None` runs a seed-only pass (offline mode). Apart from the fetch
/// itself the pass is a pure function of its inputs and `now`, so separate
/// reconcilers never interfere.
pub struct Reconciler {
    seed: SeedTable,
    sheet: Option<SheetSource>,
    layout: SheetLayout,
}

impl Reconciler {
    pub fn new(seed: SeedTable, sheet: Option<SheetSource>) -> Self {
        Self {
            seed,
            sheet,
            layout: SheetLayout::default(),
        }
    }

    /// Override the sheet column layout
    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Run one full pass: fetch, parse, merge, derive
    ///
    /// Fetch failure is non-fatal: the pass degrades to seed-only and the
    /// failure is reported as an Error diagnostic. The only `Err` out of
    /// here is a malformed seed table, which is configuration, not data.
    pub async fn reconcile(&self, now: NaiveDate) -> Result<ReconcileReport> {
        let fetched = match &self.sheet {
            Some(source) => Some(source.fetch_rows().await),
            None => None,
        };
        self.reconcile_rows(fetched, now)
    }

    /// The pure tail of a pass, split out so tests can inject fetch results
    ///
    /// `fetched` is `None` when no sheet is configured, `Some(Err)` when the
    /// fetch failed, `Some(Ok(rows))` otherwise.
    pub fn reconcile_rows(
        &self,
        fetched: Option<std::result::Result<Vec<Vec<String>>, FetchError>>,
        now: NaiveDate,
    ) -> Result<ReconcileReport> {
        let mut diagnostics = Vec::new();

        let seed_events = self.seed.events()?;
        diagnostics.push(Diagnostic::success(
            "seed",
            format!("loaded {} row(s)", seed_events.len()),
        ));

        let sheet_events = match fetched {
            None => {
                diagnostics.push(Diagnostic::success("sheet", "not configured, skipped"));
                Vec::new()
            }
            Some(Err(e)) => {
                let cause = crate::Error::from(e);
                tracing::warn!(error = %cause, "sheet fetch failed, continuing seed-only");
                diagnostics.push(Diagnostic::error(
                    "sheet",
                    format!("{}, continuing with seed data only", cause),
                ));
                Vec::new()
            }
            Some(Ok(rows)) => {
                let outcome = parse_sheet_rows(&rows, &self.layout);
                diagnostics.extend(outcome.diagnostics);
                outcome.events
            }
        };

        // Seed first: source order is the tie-break rank for equal dates
        let events = merge(vec![seed_events, sheet_events]);
        let intervals = derive_intervals(&events, now);

        tracing::info!(
            events = events.len(),
            intervals = intervals.len(),
            "reconciliation pass complete"
        );

        Ok(ReconcileReport {
            events,
            intervals,
            diagnostics,
        })
    }
}
