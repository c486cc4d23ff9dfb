// Swipe engine exports
pub mod feed;
pub mod ordering;
pub mod recorder;

use thiserror::Error;
use uuid::Uuid;

use crate::services::StoreError;

pub use feed::{FeedSelector, NextCandidate};
pub use ordering::{CandidateOrdering, NewestFirst, Shuffled};
pub use recorder::DecisionRecorder;

/// Errors surfaced by the feed selector and decision recorder
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Profile not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid decision: {0}")]
    InvalidDecision(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}
