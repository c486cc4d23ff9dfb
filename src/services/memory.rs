use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Decision, DecisionOutcome, DecisionStats, DogProfile, MatchPair, StoredMatch};
use crate::services::store::{ProfileStore, StoreError};

#[derive(Default)]
struct Tables {
    profiles: HashMap<Uuid, DogProfile>,
    decisions: HashMap<(Uuid, Uuid), Decision>,
    matches: HashMap<MatchPair, DateTime<Utc>>,
}

/// In-memory profile store for tests and local development
///
/// Mirrors the PostgreSQL store's semantics, including the per-pair
/// critical section around the decision upsert: each normalized pair has
/// its own async mutex, so decisions on different pairs proceed in
/// parallel while the two directions of one pair are serialized.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    pair_locks: Mutex<HashMap<MatchPair, Arc<tokio::sync::Mutex<()>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn pair_lock(&self, pair: MatchPair) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.pair_locks.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(locks.entry(pair).or_default())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn create_profile(&self, profile: &DogProfile) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn get_profile(&self, id: Uuid) -> Result<DogProfile, StoreError> {
        let tables = self.tables.read().await;
        tables
            .profiles
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_profile(&self, profile: &DogProfile) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        match tables.profiles.get_mut(&profile.id) {
            Some(existing) => {
                *existing = profile.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(profile.id)),
        }
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.profiles.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        // Cascade, as the foreign keys do in PostgreSQL
        tables
            .decisions
            .retain(|(source, target), _| *source != id && *target != id);
        tables.matches.retain(|pair, _| !pair.contains(id));
        Ok(())
    }

    async fn list_candidates(&self, source: &DogProfile) -> Result<Vec<DogProfile>, StoreError> {
        let tables = self.tables.read().await;
        let mut candidates: Vec<DogProfile> = tables
            .profiles
            .values()
            .filter(|p| p.owner_user_id != source.owner_user_id)
            .filter(|p| !tables.decisions.contains_key(&(source.id, p.id)))
            .cloned()
            .collect();

        // Stable newest-first base order, matching the SQL query
        candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(candidates)
    }

    async fn put_decision(
        &self,
        decision: &Decision,
    ) -> Result<Option<DecisionOutcome>, StoreError> {
        let pair = MatchPair::new(decision.source_dog_id, decision.target_dog_id);
        let lock = self.pair_lock(pair);
        let _guard = lock.lock().await;

        let mut tables = self.tables.write().await;
        tables.decisions.insert(
            (decision.source_dog_id, decision.target_dog_id),
            decision.clone(),
        );

        let reciprocal = tables
            .decisions
            .get(&(decision.target_dog_id, decision.source_dog_id))
            .map(|d| d.outcome);
        Ok(reciprocal)
    }

    async fn get_decision(
        &self,
        source_dog_id: Uuid,
        target_dog_id: Uuid,
    ) -> Result<Option<Decision>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.decisions.get(&(source_dog_id, target_dog_id)).cloned())
    }

    async fn clear_decisions(&self, source_dog_id: Uuid) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.decisions.len();
        tables
            .decisions
            .retain(|(source, _), _| *source != source_dog_id);
        Ok((before - tables.decisions.len()) as u64)
    }

    async fn decision_stats(&self, source_dog_id: Uuid) -> Result<DecisionStats, StoreError> {
        let tables = self.tables.read().await;
        let outgoing: Vec<&Decision> = tables
            .decisions
            .iter()
            .filter(|((source, _), _)| *source == source_dog_id)
            .map(|(_, d)| d)
            .collect();

        Ok(DecisionStats {
            dog_id: source_dog_id,
            total: outgoing.len() as i64,
            liked: outgoing
                .iter()
                .filter(|d| d.outcome == DecisionOutcome::Like)
                .count() as i64,
            passed: outgoing
                .iter()
                .filter(|d| d.outcome == DecisionOutcome::Pass)
                .count() as i64,
            last_decided_at: outgoing.iter().map(|d| d.decided_at).max(),
        })
    }

    async fn insert_match(&self, pair: &MatchPair) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.matches.contains_key(pair) {
            return Ok(false);
        }
        tables.matches.insert(*pair, Utc::now());
        Ok(true)
    }

    async fn list_matches(&self, dog_id: Uuid) -> Result<Vec<StoredMatch>, StoreError> {
        let tables = self.tables.read().await;
        let mut matches: Vec<StoredMatch> = tables
            .matches
            .iter()
            .filter(|(pair, _)| pair.contains(dog_id))
            .map(|(pair, matched_at)| StoredMatch {
                dog_a: pair.dog_a,
                dog_b: pair.dog_b,
                matched_at: *matched_at,
            })
            .collect();

        matches.sort_by(|a, b| b.matched_at.cmp(&a.matched_at));
        Ok(matches)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
