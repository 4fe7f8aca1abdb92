//! Remote service port for task creation.

use crate::list::domain::RecordId;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task operations.
pub type RemoteApiResult<T> = Result<T, RemoteApiError>;

/// Record-like payload sent to the remote service for a locally created
/// task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    /// Display text of the new task.
    pub text: String,
    /// Completion flag at creation time.
    pub is_ready: bool,
}

/// Response returned by the remote service after storing a task.
///
/// Carries at least the permanent identifier assigned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RemoteAddResponse {
    /// Identifier assigned by the remote service.
    pub id: RecordId,
}

/// Remote task-creation contract.
///
/// Invoked once per locally created task. Protocol framing, retries, and
/// timeouts are the implementor's responsibility; the store only consumes
/// the assigned identifier or the surfaced failure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RemoteTaskApi: Send + Sync {
    /// Stores a new task remotely and returns the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteApiError`] when the service rejects the task or
    /// the transport fails.
    async fn add_task(&self, draft: TaskDraft) -> RemoteApiResult<RemoteAddResponse>;
}

/// Errors returned by remote task API implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteApiError {
    /// The service refused to store the task.
    #[error("remote service rejected the task: {0}")]
    Rejected(String),

    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteApiError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
