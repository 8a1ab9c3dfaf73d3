//! Client for the read-only `/api/v1/stats` aggregate.

use launchdeck_core::DashboardStats;

use crate::error::ApiError;
use crate::http::Http;

const BASE: &str = "/api/v1/stats";

/// Client for the dashboard aggregate. Read-only: the counters have no
/// mutation counterpart.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Http,
}

impl StatsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch the dashboard counters.
    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.http.get(BASE).await
    }
}
