//! Dashboard page state: a single read-only aggregate instead of a
//! collection, same lifecycle otherwise.

use launchdeck_core::DashboardStats;

use crate::ops::StatsSource;
use crate::state::Phase;

/// Controller for the dashboard page.
pub struct StatsPage<S: StatsSource> {
    source: S,
    phase: Phase,
    stats: Option<DashboardStats>,
    error: Option<String>,
}

impl<S: StatsSource> StatsPage<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: Phase::Idle,
            stats: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last fetched counters, kept on display through a failed refresh.
    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the aggregate. The stats endpoint may not be implemented on
    /// every backend yet; a failure surfaces like any other and the page
    /// stays retryable.
    pub async fn refresh(&mut self) {
        self.error = None;
        self.phase = Phase::Loading;
        match self.source.get_stats().await {
            Ok(stats) => {
                self.stats = Some(stats);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                tracing::warn!(error = %err, "stats fetch failed");
                self.error = Some(err.to_string());
                self.phase = Phase::Errored;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
