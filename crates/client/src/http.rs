//! Transport adapter over [`reqwest`].
//!
//! Every resource client funnels through [`Http`]: relative path in, typed
//! JSON out. The adapter owns error normalization (see
//! [`ApiError`](crate::error::ApiError)) and the empty-body rule -- a 2xx
//! response with status 204 or a non-JSON content type decodes as an empty
//! JSON object instead of failing, which is what no-content deletions and
//! bare acknowledgements produce.

use reqwest::header::{self, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Shared HTTP transport for a single backend.
///
/// Holds no mutable state beyond the fixed base URL; cloning shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
    base_url: String,
}

impl Http {
    /// Create a transport for the configured backend.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// Base URL this transport targets (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::GET, path, None).await?;
        decode(body)
    }

    /// `POST` a JSON body and decode the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.execute(Method::POST, path, Some(payload)).await?;
        decode(body)
    }

    /// `POST` without a body (action endpoints such as the launch sync).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::POST, path, None).await?;
        decode(body)
    }

    /// `PUT` a JSON body and decode the JSON response.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body = self.execute(Method::PUT, path, Some(payload)).await?;
        decode(body)
    }

    /// `DELETE` a resource. The response body, if any, is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Perform one request and return the response body as JSON, or `None`
    /// when the backend sent nothing decodable on purpose (204 / non-JSON
    /// content type).
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed before a response");
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(%method, %url, status = status.as_u16(), "backend returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        if status == StatusCode::NO_CONTENT || !is_json {
            return Ok(None);
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(value))
    }
}

/// Decode an optional response body into the caller's expected type. An
/// absent body decodes as `{}` so acknowledgement types with all-optional
/// fields resolve cleanly.
fn decode<T: DeserializeOwned>(body: Option<serde_json::Value>) -> Result<T, ApiError> {
    let value = body.unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
