//! Client for the `/api/v1/launch-bases` resource.

use launchdeck_core::{DbId, LaunchBase, LaunchBasePatch, NewLaunchBase};

use crate::error::ApiError;
use crate::http::Http;
use crate::resources::UpdateAck;

const BASE: &str = "/api/v1/launch-bases";

/// Typed CRUD client for launch bases.
#[derive(Debug, Clone)]
pub struct LaunchBasesClient {
    http: Http,
}

impl LaunchBasesClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<LaunchBase>, ApiError> {
        self.http.get(BASE).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<LaunchBase, ApiError> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    pub async fn create(&self, input: &NewLaunchBase) -> Result<LaunchBase, ApiError> {
        self.http.post(BASE, input).await
    }

    pub async fn update(
        &self,
        id: DbId,
        patch: &LaunchBasePatch,
    ) -> Result<UpdateAck, ApiError> {
        self.http.put(&format!("{BASE}/{id}"), patch).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        self.http.delete(&format!("{BASE}/{id}")).await
    }
}
