//! Client for the `/api/v1/news` resource.

use launchdeck_core::{DbId, NewNewsArticle, NewsArticle, NewsArticlePatch};

use crate::error::ApiError;
use crate::http::Http;
use crate::resources::UpdateAck;

const BASE: &str = "/api/v1/news";

/// Typed CRUD client for news articles.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Http,
}

impl NewsClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<NewsArticle>, ApiError> {
        self.http.get(BASE).await
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<NewsArticle, ApiError> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    pub async fn create(&self, input: &NewNewsArticle) -> Result<NewsArticle, ApiError> {
        self.http.post(BASE, input).await
    }

    pub async fn update(
        &self,
        id: DbId,
        patch: &NewsArticlePatch,
    ) -> Result<UpdateAck, ApiError> {
        self.http.put(&format!("{BASE}/{id}"), patch).await
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        self.http.delete(&format!("{BASE}/{id}")).await
    }
}
