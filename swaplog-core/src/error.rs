//! Common error types for the swaplog reconciler

use thiserror::Error;

/// Common result type for swaplog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the reconciliation core
///
/// None of these abort a reconciliation pass: the reconciler maps them to
/// diagnostics and degrades to fewer rows. They are surfaced as `Err` only
/// from the narrow operation that failed (seed file load, sheet fetch).
#[derive(Error, Debug)]
pub enum Error {
    /// Sheet source unreachable or returned a non-tabular response
    #[error("Fetch error: {0}")]
    Fetch(#[from] crate::fetch::FetchError),

    /// Fetched source has fewer columns than the layout requires
    #[error("Schema mismatch: expected at least {expected} columns, found {actual}")]
    SchemaMismatch { expected: usize, actual: usize },

    /// Seed table or config file is malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
