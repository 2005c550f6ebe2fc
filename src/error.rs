use thiserror::Error;

/// Errors surfaced by the public API. Every variant is recoverable by the
/// caller; the recognizer's state is left untouched whenever one is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GestureError {
    #[error("expected {expected} landmarks, found {found}")]
    InvalidLandmarkCount { expected: usize, found: usize },

    #[error("invalid recognizer state: {reason}")]
    InvalidState { reason: String },
}
