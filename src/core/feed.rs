use std::sync::Arc;
use uuid::Uuid;

use crate::core::ordering::CandidateOrdering;
use crate::core::EngineError;
use crate::models::DogProfile;
use crate::services::ProfileStore;

/// Outcome of a feed selection
#[derive(Debug)]
pub enum NextCandidate {
    Candidate(DogProfile),
    /// No undecided candidates remain; a normal end state, not an error
    Exhausted,
}

/// Selects the next dog profile to show to a given source dog
///
/// Exclusion of the source itself, its owner's other dogs and every
/// already-decided candidate happens in the store query; the configured
/// ordering strategy then picks which of the remaining candidates surfaces
/// first.
#[derive(Clone)]
pub struct FeedSelector {
    ordering: Arc<dyn CandidateOrdering>,
}

impl FeedSelector {
    pub fn new(ordering: Arc<dyn CandidateOrdering>) -> Self {
        Self { ordering }
    }

    pub async fn next_candidate(
        &self,
        store: &dyn ProfileStore,
        source_dog_id: Uuid,
    ) -> Result<NextCandidate, EngineError> {
        let source = store.get_profile(source_dog_id).await?;

        let mut candidates = store.list_candidates(&source).await?;
        self.ordering.arrange(&mut candidates);

        match candidates.into_iter().next() {
            Some(profile) => {
                tracing::debug!("Next candidate for {}: {}", source_dog_id, profile.id);
                Ok(NextCandidate::Candidate(profile))
            }
            None => {
                tracing::debug!("Feed exhausted for {}", source_dog_id);
                Ok(NextCandidate::Exhausted)
            }
        }
    }
}
