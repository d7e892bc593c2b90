//! Filtered projections of the derived log
//!
//! Select-all-by-default: a criterion restricts results only when it names
//! at least one value. Filtering is an order-preserving subsequence: no
//! re-sorting, no mutation of the intervals themselves.

use std::collections::HashSet;

use crate::model::ComponentInterval;

/// Presentation filter criteria
///
/// An empty set imposes no restriction on its field.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub aircraft_ids: HashSet<String>,
    pub positions: HashSet<String>,
    pub serials: HashSet<String>,
}

impl FilterCriteria {
    /// True when no criterion restricts anything
    pub fn is_empty(&self) -> bool {
        self.aircraft_ids.is_empty() && self.positions.is_empty() && self.serials.is_empty()
    }

    fn matches(&self, interval: &ComponentInterval) -> bool {
        let e = &interval.event;
        (self.aircraft_ids.is_empty() || self.aircraft_ids.contains(&e.aircraft_id))
            && (self.positions.is_empty() || self.positions.contains(&e.position))
            && (self.serials.is_empty() || self.serials.contains(&e.serial))
    }
}

/// Project intervals through the criteria
pub fn filter_intervals(
    intervals: &[ComponentInterval],
    criteria: &FilterCriteria,
) -> Vec<ComponentInterval> {
    intervals
        .iter()
        .filter(|i| criteria.matches(i))
        .cloned()
        .collect()
}
