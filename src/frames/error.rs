//! Error types for the framing engine.
//!
//! Only window-level errors abort a run. Per-entity problems are carried on
//! the resampled series as issues and reported by the caller.

use chrono::NaiveDateTime;

/// Result type for framing operations
pub type FrameResult<T> = Result<T, FrameError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The window is empty, reversed or has a non-positive stride.
    #[error("Malformed frame window: {0}")]
    MalformedWindow(String),

    /// A stride string from configuration could not be parsed.
    #[error("Invalid stride '{0}'")]
    InvalidStride(String),

    /// A matched snapshot does not carry the requested counter.
    #[error("Entity {entity_id} has no '{counter}' counter at {bucket}")]
    MissingCounterField {
        entity_id: String,
        counter: String,
        bucket: NaiveDateTime,
    },
}

impl FrameError {
    /// Whether the error only affects a single entity.
    pub fn is_entity_local(&self) -> bool {
        matches!(self, FrameError::MissingCounterField { .. })
    }
}
