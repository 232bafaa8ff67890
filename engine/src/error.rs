//! Error types
//!
//! Placement outcomes never surface as errors: a bad drop is reverted, an
//! orphaned drag flag is cleared, an empty undo is a no-op. Only structural
//! failures reach the caller.

use crate::scene::ItemId;

/// A persisted room document could not be imported. Live state is untouched.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document root must be a JSON object")]
    NotAnObject,
    #[error("document is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid room: {0}")]
    InvalidRoom(String),
    #[error("invalid item {id}: {reason}")]
    InvalidItem { id: String, reason: String },
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
    #[error("cannot import while a drag is in progress")]
    DragInProgress,
}

/// A drag session refused to start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("a drag session is already active")]
    AlreadyActive,
    #[error("item not found: {0}")]
    UnknownItem(ItemId),
}

/// Editor configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
