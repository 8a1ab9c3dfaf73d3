//! Client for the `/api/v1/rocket-launches` resource.
//!
//! Besides the uniform CRUD surface this client exposes the one off-pattern
//! operation in the API: [`sync`](LaunchesClient::sync), which asks the
//! backend to pull fresh launch data from its upstream source.

use serde::Deserialize;

use launchdeck_core::{DbId, Launch, LaunchPatch, NewLaunch};

use crate::error::ApiError;
use crate::http::Http;
use crate::resources::UpdateAck;

const BASE: &str = "/api/v1/rocket-launches";

/// Result of a bulk launch sync.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncOutcome {
    #[serde(default)]
    pub message: Option<String>,
    /// Number of launch records the backend ingested.
    pub count: u64,
}

/// Typed CRUD client for rocket launches.
#[derive(Debug, Clone)]
pub struct LaunchesClient {
    http: Http,
}

impl LaunchesClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch the full launch collection.
    pub async fn list(&self) -> Result<Vec<Launch>, ApiError> {
        self.http.get(BASE).await
    }

    /// Fetch one launch by id.
    pub async fn get_by_id(&self, id: DbId) -> Result<Launch, ApiError> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    /// Create a launch record by hand (most records arrive via `sync`).
    pub async fn create(&self, input: &NewLaunch) -> Result<Launch, ApiError> {
        self.http.post(BASE, input).await
    }

    /// Update a launch. Returns an acknowledgement only -- re-fetch to see
    /// the stored result.
    pub async fn update(&self, id: DbId, patch: &LaunchPatch) -> Result<UpdateAck, ApiError> {
        self.http.put(&format!("{BASE}/{id}"), patch).await
    }

    /// Delete a launch.
    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        self.http.delete(&format!("{BASE}/{id}")).await
    }

    /// Ask the backend to ingest fresh launch data from its upstream
    /// source. `limit` caps the number of records pulled; when `None` the
    /// query parameter is omitted and the backend default applies.
    pub async fn sync(&self, limit: Option<u32>) -> Result<SyncOutcome, ApiError> {
        let path = match limit {
            Some(limit) => format!("{BASE}/sync?limit={limit}"),
            None => format!("{BASE}/sync"),
        };
        self.http.post_empty(&path).await
    }
}
