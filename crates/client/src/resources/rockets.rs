//! Client for the `/api/v1/rockets` resource.

use launchdeck_core::{DbId, NewRocket, Rocket, RocketPatch};

use crate::error::ApiError;
use crate::http::Http;
use crate::resources::UpdateAck;

const BASE: &str = "/api/v1/rockets";

/// Typed CRUD client for rockets.
#[derive(Debug, Clone)]
pub struct RocketsClient {
    http: Http,
}

impl RocketsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch the full rocket collection.
    pub async fn list(&self) -> Result<Vec<Rocket>, ApiError> {
        self.http.get(BASE).await
    }

    /// Fetch one rocket by id.
    pub async fn get_by_id(&self, id: DbId) -> Result<Rocket, ApiError> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    /// Create a rocket. The backend assigns identity and audit fields and
    /// returns the stored record.
    pub async fn create(&self, input: &NewRocket) -> Result<Rocket, ApiError> {
        self.http.post(BASE, input).await
    }

    /// Update a rocket. Returns an acknowledgement only -- re-fetch to see
    /// the stored result.
    pub async fn update(&self, id: DbId, patch: &RocketPatch) -> Result<UpdateAck, ApiError> {
        self.http.put(&format!("{BASE}/{id}"), patch).await
    }

    /// Delete a rocket.
    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        self.http.delete(&format!("{BASE}/{id}")).await
    }
}
