//! Task record entity and its creation payloads.

use super::{LoadError, RecordId};
use serde::{Deserialize, Serialize};

/// One task entry: identifier, display text, and completion flag.
///
/// Fields are private. Every mutation flows through the owning store so
/// the derived incomplete tally has exactly one writer; callers read
/// records through the accessors and mutate them through store methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    id: RecordId,
    text: String,
    is_ready: bool,
}

impl TaskRecord {
    /// Reconstructs a record from already-persisted fields.
    ///
    /// The identifier is trusted as-is; no remote confirmation is pending.
    #[must_use]
    pub fn from_loaded(loaded: LoadedTask) -> Self {
        Self {
            id: loaded.id,
            text: loaded.text,
            is_ready: loaded.checked,
        }
    }

    /// Builds a record for a locally created task with a provisional id.
    pub(crate) fn from_new(id: RecordId, new: NewTask) -> Self {
        Self {
            id,
            text: new.text,
            is_ready: new.ready,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.is_ready
    }

    pub(crate) fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_ready(&mut self, ready: bool) {
        self.is_ready = ready;
    }
}

/// Caller-supplied fields for creating a task locally.
///
/// The provisional identifier is always assigned by the store's monotonic
/// counter; callers choose the text and, rarely, an initial completion
/// flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    text: String,
    ready: bool,
}

impl NewTask {
    /// Creates the payload for a new, incomplete task.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ready: false,
        }
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub fn with_ready(mut self, ready: bool) -> Self {
        self.ready = ready;
        self
    }
}

/// Persisted task fields accepted by the bulk-load interface.
///
/// The wire shape uses `checked` for the completion flag, matching the
/// persisted format the task service produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedTask {
    /// Persisted identifier, trusted as-is.
    pub id: RecordId,
    /// Persisted display text.
    pub text: String,
    /// Persisted completion flag.
    pub checked: bool,
}

/// Parses a JSON array of persisted tasks for bulk loading.
///
/// # Errors
///
/// Returns [`LoadError`] when the input is not a JSON array of objects
/// carrying `id`, `text`, and `checked` fields.
pub fn parse_loaded_tasks(json: &str) -> Result<Vec<LoadedTask>, LoadError> {
    Ok(serde_json::from_str(json)?)
}
