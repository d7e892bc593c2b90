//! # Component Log Reconciler
//!
//! Reconciles aircraft component swap records from two tabular sources, a
//! curated seed table and a fetched spreadsheet export, into one canonical
//! event log, and derives for each (aircraft, position) slot the interval
//! during which each serial-numbered part occupied it.
//!
//! Pipeline: raw sources → row parser → field normalizer → merger →
//! interval deriver → filter view → host presentation. Every stage is a
//! pure function over its inputs; the sheet fetch is the only I/O, and its
//! failure degrades a pass to seed-only instead of aborting it.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod intervals;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod parse;
pub mod reconcile;
pub mod seed;

pub use cache::CachedReconciler;
pub use error::{Error, Result};
pub use filter::FilterCriteria;
pub use model::{ComponentEvent, ComponentInterval, Diagnostic, Severity, SourceKind};
pub use reconcile::{ReconcileReport, Reconciler};
