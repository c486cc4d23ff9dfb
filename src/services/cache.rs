use std::time::Duration;
use uuid::Uuid;

use crate::models::DogProfile;

/// In-process read-through cache for dog profiles
///
/// Profiles are read on every feed and decision request but change only on
/// owner edits, so a small TTL cache in front of the store removes most
/// point lookups. Entries are invalidated on edit and delete.
#[derive(Clone)]
pub struct ProfileCache {
    cache: moka::future::Cache<Uuid, DogProfile>,
}

impl ProfileCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    pub async fn get(&self, id: Uuid) -> Option<DogProfile> {
        let hit = self.cache.get(&id).await;
        if hit.is_some() {
            tracing::trace!("Profile cache hit: {}", id);
        }
        hit
    }

    pub async fn insert(&self, profile: DogProfile) {
        self.cache.insert(profile.id, profile).await;
    }

    pub async fn invalidate(&self, id: Uuid) {
        self.cache.invalidate(&id).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile() -> DogProfile {
        DogProfile {
            id: Uuid::new_v4(),
            owner_user_id: Uuid::new_v4(),
            name: "Biscuit".into(),
            age: Some(2),
            gender: None,
            breed: Some("corgi".into()),
            personality: None,
            bio: None,
            photo_ref: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_get_invalidate() {
        let cache = ProfileCache::new(100, 60);
        let p = profile();
        let id = p.id;

        assert!(cache.get(id).await.is_none());

        cache.insert(p).await;
        assert_eq!(cache.get(id).await.unwrap().name, "Biscuit");

        cache.invalidate(id).await;
        assert!(cache.get(id).await.is_none());
    }
}
