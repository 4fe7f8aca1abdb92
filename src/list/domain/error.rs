//! Error types for list domain parsing.

use thiserror::Error;

/// Error returned while parsing persisted task data.
#[derive(Debug, Error)]
#[error("invalid persisted task data: {0}")]
pub struct LoadError(#[from] serde_json::Error);
