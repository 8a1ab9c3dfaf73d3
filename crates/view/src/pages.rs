//! Concrete page types, one per admin page.

use launchdeck_client::{
    CompaniesClient, LaunchBasesClient, LaunchesClient, NewsClient, RocketsClient, StatsClient,
};

use crate::dashboard::StatsPage;
use crate::page::ResourcePage;

pub type RocketsPage = ResourcePage<RocketsClient>;
pub type LaunchesPage = ResourcePage<LaunchesClient>;
pub type NewsPage = ResourcePage<NewsClient>;
pub type LaunchBasesPage = ResourcePage<LaunchBasesClient>;
pub type CompaniesPage = ResourcePage<CompaniesClient>;
pub type DashboardPage = StatsPage<StatsClient>;
