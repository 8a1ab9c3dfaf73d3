//! Facade bundling every resource client behind one shared transport.

use crate::config::ClientConfig;
use crate::http::Http;
use crate::resources::{
    CompaniesClient, LaunchBasesClient, LaunchesClient, NewsClient, RocketsClient, StatsClient,
};

/// Entry point for talking to the admin backend.
///
/// Constructs the [`Http`] transport once; the per-resource accessors hand
/// out clients sharing its connection pool.
#[derive(Debug, Clone)]
pub struct LaunchdeckApi {
    http: Http,
}

impl LaunchdeckApi {
    /// Build an API handle for the given configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let http = Http::new(config);
        tracing::info!(base_url = %http.base_url(), "admin API client ready");
        Self { http }
    }

    /// Build an API handle from environment configuration.
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }

    /// Base URL this handle targets.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn rockets(&self) -> RocketsClient {
        RocketsClient::new(self.http.clone())
    }

    pub fn launches(&self) -> LaunchesClient {
        LaunchesClient::new(self.http.clone())
    }

    pub fn news(&self) -> NewsClient {
        NewsClient::new(self.http.clone())
    }

    pub fn launch_bases(&self) -> LaunchBasesClient {
        LaunchBasesClient::new(self.http.clone())
    }

    pub fn companies(&self) -> CompaniesClient {
        CompaniesClient::new(self.http.clone())
    }

    pub fn stats(&self) -> StatsClient {
        StatsClient::new(self.http.clone())
    }
}
