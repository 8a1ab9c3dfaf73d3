//! Collection view state machine.

use launchdeck_client::ApiError;
use launchdeck_core::DbId;

/// Lifecycle phase of a resource view.
///
/// `Ready` and `Errored` are both re-enterable: any manual or
/// mutation-triggered re-fetch goes back through `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Errored,
}

/// Token identifying one issued fetch. A response must present its token to
/// be applied; only the latest issued token wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// State container for one page's collection snapshot.
///
/// Holds the records last confirmed by the server, the loading phase, a
/// single error slot, and the pending-delete confirmation slot. All
/// transitions are synchronous; the async work happens in the page
/// controller that drives this.
#[derive(Debug)]
pub struct CollectionView<T> {
    phase: Phase,
    records: Vec<T>,
    error: Option<String>,
    pending_delete: Option<DbId>,
    issued: u64,
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionView<T> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            records: Vec::new(),
            error: None,
            pending_delete: None,
            issued: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The last server-confirmed snapshot. Kept on display even while a
    /// re-fetch is in flight or after a failed one.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Current content of the error slot, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<DbId> {
        self.pending_delete
    }

    /// Start a fetch cycle: clear the error slot, enter `Loading`, and
    /// return the token the eventual response must present.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.error = None;
        self.phase = Phase::Loading;
        self.issued += 1;
        FetchToken(self.issued)
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when
    /// the token has been superseded by a newer `begin_fetch` -- the view
    /// reflects only its most recently requested data.
    pub fn resolve(&mut self, token: FetchToken, outcome: Result<Vec<T>, ApiError>) -> bool {
        if token.0 != self.issued {
            tracing::debug!(
                token = token.0,
                latest = self.issued,
                "discarding superseded fetch response"
            );
            return false;
        }
        match outcome {
            Ok(records) => {
                self.records = records;
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.phase = Phase::Errored;
            }
        }
        true
    }

    /// Surface a non-fetch failure (mutation or validation) in the error
    /// slot. The displayed collection and phase are left alone.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Dismiss the error slot. Also called at the start of every attempt so
    /// errors never accumulate.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Stage a delete for confirmation. Nothing is sent yet.
    pub fn request_delete(&mut self, id: DbId) {
        self.pending_delete = Some(id);
    }

    /// Abandon the staged delete. No network call was or will be made.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consume the staged delete for execution.
    pub fn take_pending_delete(&mut self) -> Option<DbId> {
        self.pending_delete.take()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
