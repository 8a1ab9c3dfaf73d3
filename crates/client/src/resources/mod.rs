//! Typed clients, one per backend resource.
//!
//! Every client maps the CRUD verbs onto the versioned, resource-pluralized
//! endpoint convention (`/api/v1/<resource>` and `/api/v1/<resource>/{id}`)
//! and delegates the wire work to [`Http`](crate::http::Http).

use serde::Deserialize;

pub mod companies;
pub mod launch_bases;
pub mod launches;
pub mod news;
pub mod rockets;
pub mod stats;

pub use companies::CompaniesClient;
pub use launch_bases::LaunchBasesClient;
pub use launches::{LaunchesClient, SyncOutcome};
pub use news::NewsClient;
pub use rockets::RocketsClient;
pub use stats::StatsClient;

/// Acknowledgement returned by update endpoints.
///
/// The backend confirms a write without echoing the mutated record, so this
/// decodes leniently: `{"message": ...}`, a bare `{}`, and a 204 all
/// resolve. Callers re-fetch to observe the new state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAck {
    #[serde(default)]
    pub message: Option<String>,
}
