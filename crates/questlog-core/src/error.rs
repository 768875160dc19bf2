//! Engine error types.
//!
//! Every fallible engine operation returns one of these. None of them is
//! fatal: after any error the engine is left in the state it had before the
//! failed call, so callers can report the problem and keep going.

use thiserror::Error;

/// Errors surfaced by [`crate::engine::QuestEngine`] operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No goal with the given name exists in the registry.
    #[error("no goal named '{name}'")]
    NotFound { name: String },

    /// A goal with the same (case-insensitive) name already exists.
    #[error("a goal named '{name}' already exists")]
    DuplicateName { name: String },

    /// The save file exists but could not be parsed.
    #[error("malformed save data: {0}")]
    Format(#[from] serde_json::Error),

    /// Reading or writing the save file failed.
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Returns `true` if the error concerns the save file rather than an
    /// in-memory operation.
    pub fn is_persistence(&self) -> bool {
        matches!(self, EngineError::Format(_) | EngineError::Io(_))
    }
}
