//! Dashboard aggregate counters.

use serde::{Deserialize, Serialize};

/// Read-only aggregate returned by `GET /api/v1/stats`.
///
/// The backend owns the aggregation semantics (including where the
/// "upcoming" cutoff falls); the client displays the counters as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rockets: i64,
    pub upcoming_launches: i64,
    pub news_articles: i64,
    pub launch_bases: i64,
    pub companies: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
