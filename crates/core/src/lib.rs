//! Launchdeck domain types.
//!
//! Shared building blocks for the admin client:
//!
//! - [`types`] -- primitive aliases (`DbId`, `Timestamp`).
//! - [`error`] -- [`CoreError`](error::CoreError).
//! - [`validate`] -- presence checks run before any payload leaves the client.
//! - One module per server-owned entity (rockets, launches, news, launch
//!   bases, companies) plus the read-only dashboard aggregate.
//!
//! Entities mirror the backend's wire shapes; identities and audit
//! timestamps are server-assigned, so the `New*` / `*Patch` payload types
//! exclude them entirely.

pub mod company;
pub mod error;
pub mod launch;
pub mod launch_base;
pub mod news;
pub mod rocket;
pub mod stats;
pub mod types;
pub mod validate;

pub use company::{Company, CompanyPatch, NewCompany};
pub use error::CoreError;
pub use launch::{Launch, LaunchPatch, LaunchStatus, NewLaunch};
pub use launch_base::{LaunchBase, LaunchBasePatch, NewLaunchBase};
pub use news::{NewNewsArticle, NewsArticle, NewsArticlePatch};
pub use rocket::{NewRocket, Rocket, RocketPatch};
pub use stats::DashboardStats;
pub use types::{DbId, Timestamp};
pub use validate::Validate;
