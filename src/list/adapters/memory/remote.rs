//! In-memory remote task API.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::list::{
    domain::RecordId,
    ports::{RemoteAddResponse, RemoteApiError, RemoteApiResult, RemoteTaskApi, TaskDraft},
};

/// Thread-safe in-memory remote task API.
///
/// Assigns sequential identifiers starting from a configurable base and
/// keeps every received draft for inspection. Doubles as an offline
/// backend and as the remote collaborator in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRemoteApi {
    state: Arc<RwLock<InMemoryRemoteState>>,
}

#[derive(Debug, Default)]
struct InMemoryRemoteState {
    next_id: u64,
    drafts: Vec<TaskDraft>,
    rejecting: bool,
}

impl InMemoryRemoteApi {
    /// Creates an API assigning identifiers from zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an API assigning identifiers from the given base.
    #[must_use]
    pub fn starting_at(next_id: u64) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryRemoteState {
                next_id,
                ..InMemoryRemoteState::default()
            })),
        }
    }

    /// Makes every subsequent call fail with a rejection.
    pub fn reject_further_tasks(&self) {
        if let Ok(mut state) = self.state.write() {
            state.rejecting = true;
        }
    }

    /// Returns the drafts received so far, in call order.
    #[must_use]
    pub fn received(&self) -> Vec<TaskDraft> {
        self.state
            .read()
            .map(|state| state.drafts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RemoteTaskApi for InMemoryRemoteApi {
    async fn add_task(&self, draft: TaskDraft) -> RemoteApiResult<RemoteAddResponse> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RemoteApiError::transport(std::io::Error::other(err.to_string())))?;
        if state.rejecting {
            return Err(RemoteApiError::Rejected("service unavailable".to_owned()));
        }

        let id = RecordId::new(state.next_id);
        state.next_id = state.next_id.saturating_add(1);
        state.drafts.push(draft);
        Ok(RemoteAddResponse { id })
    }
}
