use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Decision, DecisionOutcome, DecisionStats, DogProfile, MatchPair, StoredMatch};

/// Errors that can occur when interacting with the profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile not found: {0}")]
    NotFound(Uuid),

    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Persistence contract for dog profiles, decisions and cached matches
///
/// Pure data access; all swipe semantics live in `core`. Implemented by
/// [`PgProfileStore`](crate::services::PgProfileStore) for production and
/// [`MemoryStore`](crate::services::MemoryStore) for tests and local runs.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create_profile(&self, profile: &DogProfile) -> Result<(), StoreError>;

    async fn get_profile(&self, id: Uuid) -> Result<DogProfile, StoreError>;

    /// Replace the display attributes of an existing profile
    async fn update_profile(&self, profile: &DogProfile) -> Result<(), StoreError>;

    /// Delete a profile, cascading its decisions and matches
    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError>;

    /// List candidate profiles for the given source dog
    ///
    /// Excludes every dog owned by the source's owner (the source itself
    /// included) and every dog the source has already decided on. The
    /// returned order is stable within one call (newest profile first) but
    /// otherwise unspecified; callers apply their own ordering strategy.
    async fn list_candidates(&self, source: &DogProfile) -> Result<Vec<DogProfile>, StoreError>;

    /// Upsert a decision and report the reciprocal outcome
    ///
    /// The upsert and the reciprocal read execute under mutual exclusion
    /// scoped to the unordered pair, so two concurrent likes from both
    /// sides cannot both observe "no reciprocal like yet". Decisions on
    /// different pairs proceed in parallel.
    async fn put_decision(
        &self,
        decision: &Decision,
    ) -> Result<Option<DecisionOutcome>, StoreError>;

    async fn get_decision(
        &self,
        source_dog_id: Uuid,
        target_dog_id: Uuid,
    ) -> Result<Option<Decision>, StoreError>;

    /// Remove all outgoing decisions of a dog, returning the number removed
    async fn clear_decisions(&self, source_dog_id: Uuid) -> Result<u64, StoreError>;

    async fn decision_stats(&self, source_dog_id: Uuid) -> Result<DecisionStats, StoreError>;

    /// Record a match, returning false when the pair was already recorded
    ///
    /// Insertion is keyed on the normalized pair, which makes duplicate
    /// match notifications invisible to consumers.
    async fn insert_match(&self, pair: &MatchPair) -> Result<bool, StoreError>;

    async fn list_matches(&self, dog_id: Uuid) -> Result<Vec<StoredMatch>, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
