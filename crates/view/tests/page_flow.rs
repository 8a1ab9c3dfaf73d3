//! Page-controller tests with a scripted resource client -- no network.
//!
//! The stub records every call so the tests can assert not just the final
//! state but that the right calls happened in the right order (and, for the
//! cancelled-delete and failed-validation paths, that none happened at all).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use launchdeck_client::{ApiError, UpdateAck};
use launchdeck_core::validate::require_text;
use launchdeck_core::{CoreError, DbId, Validate};
use launchdeck_view::{Phase, ResourceOps, ResourcePage};

// ---------------------------------------------------------------------------
// Scripted stub
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Pad {
    id: DbId,
    name: String,
}

fn pad(id: DbId, name: &str) -> Pad {
    Pad {
        id,
        name: name.to_string(),
    }
}

struct NewPad {
    name: String,
}

impl Validate for NewPad {
    fn validate(&self) -> Result<(), CoreError> {
        require_text("name", &self.name)
    }
}

#[derive(Default)]
struct PadPatch {
    name: Option<String>,
}

impl Validate for PadPatch {
    fn validate(&self) -> Result<(), CoreError> {
        match self.name.as_deref() {
            Some(name) => require_text("name", name),
            None => Ok(()),
        }
    }
}

/// Resource client whose responses are scripted per test. Every call is
/// appended to `calls`; popping an empty queue fails the test loudly.
#[derive(Default)]
struct ScriptedPads {
    lists: Mutex<VecDeque<Result<Vec<Pad>, ApiError>>>,
    gets: Mutex<VecDeque<Result<Pad, ApiError>>>,
    creates: Mutex<VecDeque<Result<Pad, ApiError>>>,
    updates: Mutex<VecDeque<Result<UpdateAck, ApiError>>>,
    deletes: Mutex<VecDeque<Result<(), ApiError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPads {
    fn push_list(&self, result: Result<Vec<Pad>, ApiError>) {
        self.lists.lock().unwrap().push_back(result);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn server_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "backend exploded".to_string(),
    }
}

#[async_trait]
impl ResourceOps for ScriptedPads {
    type Entity = Pad;
    type Create = NewPad;
    type Update = PadPatch;

    const RESOURCE: &'static str = "pads";

    async fn list(&self) -> Result<Vec<Pad>, ApiError> {
        self.calls.lock().unwrap().push("list".to_string());
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected list call")
    }

    async fn get_by_id(&self, id: DbId) -> Result<Pad, ApiError> {
        self.calls.lock().unwrap().push(format!("get {id}"));
        self.gets
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected get call")
    }

    async fn create(&self, _input: &NewPad) -> Result<Pad, ApiError> {
        self.calls.lock().unwrap().push("create".to_string());
        self.creates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected create call")
    }

    async fn update(&self, id: DbId, _patch: &PadPatch) -> Result<UpdateAck, ApiError> {
        self.calls.lock().unwrap().push(format!("update {id}"));
        self.updates
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected update call")
    }

    async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("delete {id}"));
        self.deletes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected delete call")
    }
}

// ---------------------------------------------------------------------------
// Fetch lifecycle
// ---------------------------------------------------------------------------

/// Mounting a page runs exactly one fetch and lands in `Ready`.
#[tokio::test]
async fn initial_refresh_populates_page() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));

    let mut page = ResourcePage::new(pads);
    assert_eq!(page.phase(), Phase::Idle);

    page.refresh().await;
    assert_eq!(page.phase(), Phase::Ready);
    assert_eq!(page.records(), [pad(1, "LC-39A")]);
    assert_eq!(page.view().records().len(), 1);
    assert_eq!(page.error(), None);
}

/// A failed fetch lands in `Errored` with the adapter's message, keeping
/// the previous snapshot on display.
#[tokio::test]
async fn failed_refresh_surfaces_error_and_keeps_snapshot() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));
    pads.push_list(Err(server_error()));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;
    page.refresh().await;

    assert_eq!(page.phase(), Phase::Errored);
    assert!(page.error().unwrap().contains("backend exploded"));
    assert_eq!(page.records(), [pad(1, "LC-39A")]);
}

// ---------------------------------------------------------------------------
// Mutations re-fetch, never merge
// ---------------------------------------------------------------------------

/// A successful create triggers a full re-fetch; the displayed collection
/// is whatever the server returned, not a local merge of the created row.
#[tokio::test]
async fn create_refetches_instead_of_merging() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));
    pads.creates
        .lock()
        .unwrap()
        .push_back(Ok(pad(99, "client-side view of the row")));
    // The server's post-write truth differs from the create response.
    pads.push_list(Ok(vec![pad(1, "LC-39A"), pad(2, "SLC-40")]));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;
    page.submit_create(&NewPad {
        name: "SLC-40".to_string(),
    })
    .await;

    assert_eq!(page.phase(), Phase::Ready);
    assert_eq!(page.records(), [pad(1, "LC-39A"), pad(2, "SLC-40")]);
    assert_eq!(page.view().records().iter().filter(|p| p.id == 99).count(), 0);
    assert_eq!(page.source_calls(), ["list", "create", "list"]);
}

/// An update acknowledges and re-fetches; the change shows up only through
/// the fresh list.
#[tokio::test]
async fn update_refetches_to_observe_change() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));
    pads.updates.lock().unwrap().push_back(Ok(UpdateAck::default()));
    pads.push_list(Ok(vec![pad(1, "LC-39A (renamed)")]));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;
    page.submit_update(
        1,
        &PadPatch {
            name: Some("LC-39A (renamed)".to_string()),
        },
    )
    .await;

    assert_eq!(page.records(), [pad(1, "LC-39A (renamed)")]);
    assert_eq!(page.source_calls(), ["list", "update 1", "list"]);
}

/// A failed mutation surfaces the adapter's message and leaves the
/// displayed collection untouched; the next attempt clears the slot.
#[tokio::test]
async fn failed_mutation_surfaces_error_then_next_attempt_clears_it() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));
    pads.deletes.lock().unwrap().push_back(Err(server_error()));
    pads.deletes.lock().unwrap().push_back(Ok(()));
    pads.push_list(Ok(vec![]));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;

    page.request_delete(1);
    page.confirm_delete().await;
    assert!(page.error().unwrap().contains("backend exploded"));
    assert_eq!(page.phase(), Phase::Ready, "collection stays interactive");
    assert_eq!(page.records(), [pad(1, "LC-39A")]);

    // Retry is user-initiated; the slot is cleared at the start of it.
    page.request_delete(1);
    page.confirm_delete().await;
    assert_eq!(page.error(), None);
    assert!(page.records().is_empty());
}

// ---------------------------------------------------------------------------
// Presence validation short-circuits
// ---------------------------------------------------------------------------

/// A payload failing presence checks never reaches the client.
#[tokio::test]
async fn invalid_create_makes_no_network_call() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;
    page.submit_create(&NewPad {
        name: "   ".to_string(),
    })
    .await;

    assert!(page.error().unwrap().contains("name"));
    assert_eq!(page.records(), [pad(1, "LC-39A")]);
    assert_eq!(page.source_calls(), ["list"], "no create call was issued");
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

/// Cancelling the confirmation prompt issues zero network calls and leaves
/// the displayed collection unchanged.
#[tokio::test]
async fn cancelled_delete_issues_no_calls() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;

    page.request_delete(1);
    page.cancel_delete();
    // Confirming after a cancel must also be inert.
    page.confirm_delete().await;

    assert_eq!(page.records(), [pad(1, "LC-39A")]);
    assert_eq!(page.source_calls(), ["list"]);
}

/// Confirming the staged delete sends it and re-fetches.
#[tokio::test]
async fn confirmed_delete_sends_then_refetches() {
    let pads = ScriptedPads::default();
    pads.push_list(Ok(vec![pad(1, "LC-39A")]));
    pads.deletes.lock().unwrap().push_back(Ok(()));
    pads.push_list(Ok(vec![]));

    let mut page = ResourcePage::new(pads);
    page.refresh().await;

    page.request_delete(1);
    page.confirm_delete().await;

    assert!(page.records().is_empty());
    assert_eq!(page.source_calls(), ["list", "delete 1", "list"]);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

trait SourceCalls {
    fn source_calls(&self) -> Vec<String>;
}

impl SourceCalls for ResourcePage<ScriptedPads> {
    fn source_calls(&self) -> Vec<String> {
        self.source().calls()
    }
}
