//! Generic page controller: one per admin page, coordinating the fetch
//! lifecycle, mutations, and delete confirmation against a
//! [`CollectionView`].

use launchdeck_client::{LaunchesClient, SyncOutcome};
use launchdeck_core::{DbId, Validate};

use crate::ops::ResourceOps;
use crate::state::{CollectionView, Phase};

/// Controller for one resource page.
///
/// Owns the view state and the injected client. Every mutation follows the
/// same contract: presence-validate locally, send, and on success re-fetch
/// the whole collection -- the server is the only authority on what a write
/// actually produced.
pub struct ResourcePage<S: ResourceOps> {
    source: S,
    view: CollectionView<S::Entity>,
}

impl<S: ResourceOps> ResourcePage<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            view: CollectionView::new(),
        }
    }

    pub fn view(&self) -> &CollectionView<S::Entity> {
        &self.view
    }

    /// The injected resource client.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn phase(&self) -> Phase {
        self.view.phase()
    }

    pub fn records(&self) -> &[S::Entity] {
        self.view.records()
    }

    pub fn error(&self) -> Option<&str> {
        self.view.error()
    }

    /// Dismiss the inline error message.
    pub fn dismiss_error(&mut self) {
        self.view.clear_error();
    }

    /// Fetch the collection and make it the displayed snapshot. Called once
    /// on page mount and again after every successful mutation.
    pub async fn refresh(&mut self) {
        let token = self.view.begin_fetch();
        let outcome = self.source.list().await;
        if let Err(err) = &outcome {
            tracing::warn!(resource = S::RESOURCE, error = %err, "collection fetch failed");
        }
        self.view.resolve(token, outcome);
    }

    /// Validate and submit a create. On success the collection is stale and
    /// gets re-fetched; the returned record is never merged locally.
    pub async fn submit_create(&mut self, input: &S::Create) {
        self.view.clear_error();
        if let Err(err) = input.validate() {
            self.view.fail(err.to_string());
            return;
        }
        match self.source.create(input).await {
            Ok(_created) => self.refresh().await,
            Err(err) => {
                tracing::warn!(resource = S::RESOURCE, error = %err, "create failed");
                self.view.fail(err.to_string());
            }
        }
    }

    /// Validate and submit an update. The backend only acknowledges, so the
    /// re-fetch is what makes the change visible.
    pub async fn submit_update(&mut self, id: DbId, patch: &S::Update) {
        self.view.clear_error();
        if let Err(err) = patch.validate() {
            self.view.fail(err.to_string());
            return;
        }
        match self.source.update(id, patch).await {
            Ok(_ack) => self.refresh().await,
            Err(err) => {
                tracing::warn!(resource = S::RESOURCE, id, error = %err, "update failed");
                self.view.fail(err.to_string());
            }
        }
    }

    /// Stage a delete; nothing is sent until [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: DbId) {
        self.view.request_delete(id);
    }

    /// Abandon the staged delete without any network call.
    pub fn cancel_delete(&mut self) {
        self.view.cancel_delete();
    }

    /// Execute the staged delete. A no-op when nothing is staged (e.g. the
    /// confirmation was cancelled first).
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.view.take_pending_delete() else {
            return;
        };
        self.view.clear_error();
        match self.source.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                tracing::warn!(resource = S::RESOURCE, id, error = %err, "delete failed");
                self.view.fail(err.to_string());
            }
        }
    }
}

impl ResourcePage<LaunchesClient> {
    /// Trigger backend ingestion of fresh launch data, then re-fetch the
    /// collection. Returns the sync outcome so the UI can report the count.
    pub async fn sync(&mut self, limit: Option<u32>) -> Option<SyncOutcome> {
        self.view.clear_error();
        match self.source.sync(limit).await {
            Ok(outcome) => {
                tracing::info!(count = outcome.count, "launch sync completed");
                self.refresh().await;
                Some(outcome)
            }
            Err(err) => {
                tracing::warn!(error = %err, "launch sync failed");
                self.view.fail(err.to_string());
                None
            }
        }
    }
}
