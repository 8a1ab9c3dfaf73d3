//! Per-page view state for the admin client.
//!
//! Each admin page owns one [`ResourcePage`]: a state container holding the
//! collection snapshot, the loading phase, and a single error slot, plus the
//! injected resource client it fetches through. The contract is
//! read-after-write via full re-fetch -- a mutation never patches the
//! in-memory collection, it invalidates it.
//!
//! Fetches are tagged with a monotonically increasing token and a response
//! is applied only if its token is still the latest issued, so a slow
//! response can never overwrite the state of a newer request.

pub mod dashboard;
pub mod ops;
pub mod page;
pub mod pages;
pub mod state;

pub use dashboard::StatsPage;
pub use ops::{ResourceOps, StatsSource};
pub use page::ResourcePage;
pub use pages::{
    CompaniesPage, DashboardPage, LaunchBasesPage, LaunchesPage, NewsPage, RocketsPage,
};
pub use state::{CollectionView, FetchToken, Phase};
