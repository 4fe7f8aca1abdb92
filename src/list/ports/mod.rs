//! Port contracts for external collaborators of the task list.

mod remote;

#[cfg(test)]
pub use remote::MockRemoteTaskApi;
pub use remote::{RemoteAddResponse, RemoteApiError, RemoteApiResult, RemoteTaskApi, TaskDraft};
