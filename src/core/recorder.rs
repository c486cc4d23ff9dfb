use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::EngineError;
use crate::models::{Decision, DecisionOutcome, MatchPair, MatchStatus};
use crate::services::{MatchNotifier, ProfileStore};

/// Records swipe decisions and detects mutual likes
///
/// The upsert-then-reciprocal-check runs atomically inside the store's
/// pair-scoped critical section, so of two concurrent likes from both
/// sides exactly one observes the other and reports the match.
#[derive(Clone)]
pub struct DecisionRecorder {
    notifier: Arc<dyn MatchNotifier>,
}

impl DecisionRecorder {
    pub fn new(notifier: Arc<dyn MatchNotifier>) -> Self {
        Self { notifier }
    }

    pub async fn record(
        &self,
        store: &dyn ProfileStore,
        source_dog_id: Uuid,
        target_dog_id: Uuid,
        outcome: DecisionOutcome,
    ) -> Result<MatchStatus, EngineError> {
        if source_dog_id == target_dog_id {
            return Err(EngineError::InvalidDecision(
                "a dog cannot decide on itself".into(),
            ));
        }

        let source = store.get_profile(source_dog_id).await?;
        let target = store.get_profile(target_dog_id).await?;

        if source.owner_user_id == target.owner_user_id {
            return Err(EngineError::InvalidDecision(
                "source and target share an owner".into(),
            ));
        }

        let decision = Decision {
            source_dog_id,
            target_dog_id,
            outcome,
            decided_at: Utc::now(),
        };
        let reciprocal = store.put_decision(&decision).await?;

        if outcome != DecisionOutcome::Like || reciprocal != Some(DecisionOutcome::Like) {
            return Ok(MatchStatus::unmatched());
        }

        let pair = MatchPair::new(source_dog_id, target_dog_id);
        let newly_matched = store.insert_match(&pair).await?;
        if newly_matched {
            tracing::info!("Mutual like: {} <-> {}", pair.dog_a, pair.dog_b);
        }

        // Fire-and-forget, at-least-once; the match table dedups consumers
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&pair).await {
                tracing::warn!(
                    "Match notification failed for {} <-> {}: {}",
                    pair.dog_a,
                    pair.dog_b,
                    e
                );
            }
        });

        Ok(MatchStatus::matched(pair))
    }
}
