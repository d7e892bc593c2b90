//! The fixed seed table
//!
//! The seed is the historical record that predates the entry form: a small
//! curated table compiled into the binary, optionally replaced by a TOML
//! file. It is configuration data, not a fetched source, so a malformed seed
//! date is a configuration error, never a silent drop.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{ComponentEvent, SourceKind};
use crate::normalize;
use crate::parse::DateConvention;

/// One row of the seed table as written in TOML
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRow {
    /// ISO date string (`YYYY-MM-DD`)
    pub date: String,
    pub aircraft: String,
    pub position: String,
    pub serial: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub work_order: Option<String>,
    #[serde(default)]
    pub fault_request: Option<String>,
    #[serde(default)]
    pub corrective_action: Option<String>,
}

/// The seed table: curated swap history kept outside the fetched sheet
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTable {
    #[serde(default)]
    pub rows: Vec<SeedRow>,
}

impl SeedTable {
    /// The compiled-in seed history
    pub fn builtin() -> Self {
        let seed = |date: &str, aircraft: &str, position: &str, serial: &str, note: &str| SeedRow {
            date: date.to_string(),
            aircraft: aircraft.to_string(),
            position: position.to_string(),
            serial: serial.to_string(),
            note: note.to_string(),
            work_order: None,
            fault_request: None,
            corrective_action: None,
        };
        Self {
            rows: vec![
                seed("2025-01-01", "HS-PGY", "SEC 3", "SN-756", "baseline install"),
                seed("2025-01-01", "HS-PGY", "ELAC 1", "SN-214", "baseline install"),
                seed("2025-02-18", "HS-PGX", "SEC 3", "SN-330", "baseline install"),
                seed("2025-03-02", "HS-PGX", "FAC 2", "unknown", "serial plate unreadable"),
                seed("2025-09-01", "HS-PGY", "SEC 3", "SN-590", "swap, fault on ground test"),
            ],
        }
    }

    /// Parse a TOML seed document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("invalid seed table: {}", e)))
    }

    /// Load a seed table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Convert seed rows to events
    ///
    /// Seed dates use the explicit ISO format; any row that fails to parse
    /// fails the whole load with `Error::Config`.
    pub fn events(&self) -> Result<Vec<ComponentEvent>> {
        self.rows
            .iter()
            .map(|row| {
                let occurred_at = DateConvention::YearFirst.parse(&row.date).ok_or_else(|| {
                    Error::Config(format!("seed row has invalid date: {:?}", row.date))
                })?;
                let (aircraft_id, position) = normalize::normalize(&row.aircraft, &row.position);
                Ok(ComponentEvent {
                    occurred_at,
                    aircraft_id,
                    position,
                    serial: row.serial.trim().to_string(),
                    note: row.note.trim().to_string(),
                    work_order: row.work_order.clone(),
                    fault_request: row.fault_request.clone(),
                    corrective_action: row.corrective_action.clone(),
                    source: SourceKind::Seed,
                })
            })
            .collect()
    }
}
