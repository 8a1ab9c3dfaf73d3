//! HTTP client for the Launchdeck admin backend.
//!
//! Three layers, leaf to root:
//!
//! - [`http::Http`] -- transport adapter: one place that performs requests,
//!   sets the JSON content type, and normalizes every failure into
//!   [`ApiError`](error::ApiError).
//! - [`resources`] -- one typed CRUD client per entity, plus the read-only
//!   stats client and the launch-specific bulk sync action.
//! - [`LaunchdeckApi`](api::LaunchdeckApi) -- facade constructing the shared
//!   transport once and handing out resource clients.
//!
//! The base URL comes from [`config::ClientConfig`], which reads
//! `LAUNCHDECK_API_BASE_URL` and falls back to the local dev backend.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;

pub use api::LaunchdeckApi;
pub use config::ClientConfig;
pub use error::ApiError;
pub use resources::{
    CompaniesClient, LaunchBasesClient, LaunchesClient, NewsClient, RocketsClient, StatsClient,
    SyncOutcome, UpdateAck,
};
