//! Trait seams between page controllers and the HTTP clients.
//!
//! Pages depend on these traits instead of the concrete clients so tests
//! can inject a scripted implementation and drive every lifecycle branch
//! without a network.

use async_trait::async_trait;

use launchdeck_client::{
    ApiError, CompaniesClient, LaunchBasesClient, LaunchesClient, NewsClient, RocketsClient,
    StatsClient, UpdateAck,
};
use launchdeck_core::{
    Company, CompanyPatch, DashboardStats, DbId, Launch, LaunchBase, LaunchBasePatch, LaunchPatch,
    NewCompany, NewLaunch, NewLaunchBase, NewNewsArticle, NewRocket, NewsArticle,
    NewsArticlePatch, Rocket, RocketPatch, Validate,
};

/// CRUD operations a page controller needs from its resource client.
///
/// `update` returns an acknowledgement by contract -- the mutated record is
/// only observable through a fresh `list`.
#[async_trait]
pub trait ResourceOps: Send + Sync {
    type Entity: Send;
    type Create: Validate + Send + Sync;
    type Update: Validate + Send + Sync;

    /// Resource name used in log lines.
    const RESOURCE: &'static str;

    async fn list(&self) -> Result<Vec<Self::Entity>, ApiError>;
    async fn get_by_id(&self, id: DbId) -> Result<Self::Entity, ApiError>;
    async fn create(&self, input: &Self::Create) -> Result<Self::Entity, ApiError>;
    async fn update(&self, id: DbId, patch: &Self::Update) -> Result<UpdateAck, ApiError>;
    async fn delete(&self, id: DbId) -> Result<(), ApiError>;
}

/// Read side of the dashboard aggregate.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn get_stats(&self) -> Result<DashboardStats, ApiError>;
}

macro_rules! impl_resource_ops {
    ($client:ty, $entity:ty, $create:ty, $update:ty, $name:literal) => {
        #[async_trait]
        impl ResourceOps for $client {
            type Entity = $entity;
            type Create = $create;
            type Update = $update;

            const RESOURCE: &'static str = $name;

            async fn list(&self) -> Result<Vec<Self::Entity>, ApiError> {
                <$client>::list(self).await
            }

            async fn get_by_id(&self, id: DbId) -> Result<Self::Entity, ApiError> {
                <$client>::get_by_id(self, id).await
            }

            async fn create(&self, input: &Self::Create) -> Result<Self::Entity, ApiError> {
                <$client>::create(self, input).await
            }

            async fn update(
                &self,
                id: DbId,
                patch: &Self::Update,
            ) -> Result<UpdateAck, ApiError> {
                <$client>::update(self, id, patch).await
            }

            async fn delete(&self, id: DbId) -> Result<(), ApiError> {
                <$client>::delete(self, id).await
            }
        }
    };
}

impl_resource_ops!(RocketsClient, Rocket, NewRocket, RocketPatch, "rockets");
impl_resource_ops!(LaunchesClient, Launch, NewLaunch, LaunchPatch, "rocket-launches");
impl_resource_ops!(NewsClient, NewsArticle, NewNewsArticle, NewsArticlePatch, "news");
impl_resource_ops!(
    LaunchBasesClient,
    LaunchBase,
    NewLaunchBase,
    LaunchBasePatch,
    "launch-bases"
);
impl_resource_ops!(CompaniesClient, Company, NewCompany, CompanyPatch, "companies");

#[async_trait]
impl StatsSource for StatsClient {
    async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        StatsClient::get_stats(self).await
    }
}
