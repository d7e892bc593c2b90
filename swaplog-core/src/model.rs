//! Domain types for the component swap log
//!
//! One `ComponentEvent` is a single observed part-installation at a point in
//! time. Events carry no primary key: a record is identified positionally by
//! its place in the merged, sorted log, and duplicates are retained.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where an event row came from
///
/// Seed rows sort before sheet rows on equal dates, so provenance is part of
/// the ordering contract, not just display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Compiled-in (or TOML-override) seed table
    Seed,
    /// Externally fetched spreadsheet export
    Sheet,
}

impl SourceKind {
    /// Short label used in diagnostics and rendered output
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Seed => "seed",
            SourceKind::Sheet => "sheet",
        }
    }
}

/// One observed installation event for a (aircraft, position) slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEvent {
    /// Calendar date of the swap (no time-of-day significance)
    pub occurred_at: NaiveDate,
    /// Normalized tail-number identifier
    pub aircraft_id: String,
    /// Normalized slot identifier within the aircraft (e.g., "SEC 3")
    pub position: String,
    /// Serial of the installed part; may be a placeholder (see
    /// [`is_placeholder_serial`])
    pub serial: String,
    /// Free-text annotation
    pub note: String,
    /// Work-order id, when the source provided one
    pub work_order: Option<String>,
    /// Fault request id, when the source provided one
    pub fault_request: Option<String>,
    /// Corrective action text, when the source provided one
    pub corrective_action: Option<String>,
    /// Originating source
    pub source: SourceKind,
}

/// A `ComponentEvent` plus its derived occupancy boundary
///
/// Computed fresh on every reconciliation pass and never persisted; a new
/// fetch or a cache invalidation discards all intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInterval {
    /// The underlying installation event
    #[serde(flatten)]
    pub event: ComponentEvent,
    /// Start of the next event in the same slot, or "now" for the last one
    pub active_until: NaiveDate,
}

impl ComponentInterval {
    /// The (aircraft, position) slot this interval belongs to
    pub fn slot(&self) -> (&str, &str) {
        (&self.event.aircraft_id, &self.event.position)
    }
}

/// Severity tag on a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Non-fatal status message describing a source's ingestion outcome
///
/// Rendered as-is by the host; the core never treats a diagnostic as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Source label the message refers to ("seed", "sheet")
    pub source: String,
    pub message: String,
}

impl Diagnostic {
    pub fn success(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            source: source.into(),
            message: message.into(),
        }
    }

    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            source: source.into(),
            message: message.into(),
        }
    }
}

/// True if a serial value means "no specific part known"
///
/// The source data uses `unknown`, `check`, or an empty cell when the
/// technician could not read the part serial.
pub fn is_placeholder_serial(serial: &str) -> bool {
    let s = serial.trim();
    s.is_empty() || s.eq_ignore_ascii_case("unknown") || s.eq_ignore_ascii_case("check")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_serial_variants() {
        assert!(is_placeholder_serial(""));
        assert!(is_placeholder_serial("  "));
        assert!(is_placeholder_serial("unknown"));
        assert!(is_placeholder_serial("UNKNOWN"));
        assert!(is_placeholder_serial("Check"));
        assert!(is_placeholder_serial(" check "));
    }

    #[test]
    fn test_real_serial_is_not_placeholder() {
        assert!(!is_placeholder_serial("SN-756"));
        assert!(!is_placeholder_serial("check-123"));
    }

    #[test]
    fn test_source_kind_labels() {
        assert_eq!(SourceKind::Seed.label(), "seed");
        assert_eq!(SourceKind::Sheet.label(), "sheet");
    }

    #[test]
    fn test_diagnostic_constructors_tag_severity() {
        assert_eq!(Diagnostic::success("sheet", "ok").severity, Severity::Success);
        assert_eq!(Diagnostic::warning("sheet", "hm").severity, Severity::Warning);
        assert_eq!(Diagnostic::error("sheet", "no").severity, Severity::Error);
    }
}
