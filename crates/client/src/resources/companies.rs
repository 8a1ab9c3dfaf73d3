//! Client for the `/api/v1/companies` resource.

use launchdeck_core::{Company, CompanyPatch, DbId, NewCompany};

use crate::error::ApiError;
use crate::http::Http;
use crate::resources::UpdateAck;

const BASE: &str = "/api/v1/companies";

/// Typed CRUD client for companies.
#[derive(Debug, Clone)]
pub struct CompaniesClient {
    http: Http,
}

impl CompaniesClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Company>, ApiError> {
        self.http.get(BASE).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Company, ApiError> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    pub async fn create(&self, input: &NewCompany) -> Result<Company, ApiError> {
        self.http.post(BASE, input).await
    }

    pub async fn update(&self, id: DbId, patch: &CompanyPatch) -> Result<UpdateAck, ApiError> {
        self.http.put(&format!("{BASE}/{id}"), patch).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        self.http.delete(&format!("{BASE}/{id}")).await
    }
}
