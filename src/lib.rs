//! Tindog Feed - swipe-feed and match engine for the Tindog dog-pairing app
//!
//! This library holds the core of the app: selecting the next dog profile
//! to show to a given dog, recording like/pass decisions, and detecting
//! mutual likes. Authentication, image storage and presentation live in
//! external collaborators.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{DecisionRecorder, EngineError, FeedSelector, NextCandidate};
pub use self::models::{Decision, DecisionOutcome, DogProfile, MatchPair, MatchStatus};
pub use self::services::{MemoryStore, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();
        assert_eq!(MatchPair::new(x, y), MatchPair::new(y, x));
    }
}
