//! TTL cache at the presentation boundary
//!
//! Memoizes whole reconciliation reports for a short, explicit time-to-live
//! so a host refreshing its view does not hammer the sheet export. The
//! cache is an optional wrapper, not part of the core contract: callers who
//! want every pass fresh use [`Reconciler`] directly.

use chrono::Utc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::reconcile::{ReconcileReport, Reconciler};

struct CacheSlot {
    stored_at: Instant,
    report: ReconcileReport,
}

/// A [`Reconciler`] with a TTL-memoized report
pub struct CachedReconciler {
    reconciler: Reconciler,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl CachedReconciler {
    /// Default time-to-live between forced refreshes
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

    pub fn new(reconciler: Reconciler, ttl: Duration) -> Self {
        Self {
            reconciler,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Serve the cached report if fresh, otherwise run a pass and store it
    ///
    /// `now` for derivation is taken at pass time, so a cache hit can be at
    /// most one TTL stale.
    pub async fn report(&self) -> Result<ReconcileReport> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.stored_at.elapsed() < self.ttl {
                tracing::debug!("serving cached reconciliation report");
                return Ok(cached.report.clone());
            }
        }

        let report = self.reconciler.reconcile(Utc::now().date_naive()).await?;
        *slot = Some(CacheSlot {
            stored_at: Instant::now(),
            report: report.clone(),
        });
        Ok(report)
    }

    /// Drop the cached report so the next [`report`](Self::report) call
    /// runs a fresh pass
    ///
    /// Idempotent: invalidating an empty cache is a no-op.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.take().is_some() {
            tracing::debug!("reconciliation cache invalidated");
        }
    }
}
