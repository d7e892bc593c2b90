//! Interval derivation
//!
//! Reconstructs, for each (aircraft, position) slot, the span during which
//! each serial-numbered part was the active occupant: a part stays in its
//! slot until the next recorded swap, and the latest part stays in until
//! "now". The log is append-only, so the whole view is recomputed from
//! scratch on every pass.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::model::{ComponentEvent, ComponentInterval};

/// Derive active-until boundaries for an ordered event log
///
/// Events are grouped by slot; each group is stable-sorted by date so that
/// equal-date events keep their merged-log order (seed before sheet, then
/// row order). Event i of a k-sized group ends where event i+1 begins; the
/// last event ends at `now`.
///
/// Groups are emitted in first-seen slot order, flattened. Relative order
/// between slots is not part of the contract; consumers re-sort for display.
/// `now` must be supplied per call so the open interval tracks evaluation
/// time.
pub fn derive_intervals(events: &[ComponentEvent], now: NaiveDate) -> Vec<ComponentInterval> {
    let mut group_index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<Vec<&ComponentEvent>> = Vec::new();

    for event in events {
        let key = (event.aircraft_id.clone(), event.position.clone());
        match group_index.get(&key) {
            Some(&i) => groups[i].push(event),
            None => {
                group_index.insert(key, groups.len());
                groups.push(vec![event]);
            }
        }
    }

    let mut intervals = Vec::with_capacity(events.len());
    for mut group in groups {
        // Stable: equal dates keep merged-log order
        group.sort_by_key(|e| e.occurred_at);
        for i in 0..group.len() {
            let active_until = match group.get(i + 1) {
                Some(next) => next.occurred_at,
                None => now,
            };
            intervals.push(ComponentInterval {
                event: group[i].clone(),
                active_until,
            });
        }
    }

    tracing::debug!(
        events = events.len(),
        intervals = intervals.len(),
        "derived occupancy intervals"
    );
    intervals
}
