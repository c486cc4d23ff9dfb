use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

use crate::models::DogProfile;

/// Pluggable candidate-ordering strategy
///
/// The requirements leave selection policy open beyond "pick one not yet
/// seen", so the policy is a seam: the store returns the eligible batch and
/// a strategy decides which candidate surfaces first.
pub trait CandidateOrdering: Send + Sync {
    fn arrange(&self, candidates: &mut Vec<DogProfile>);

    fn name(&self) -> &'static str;
}

/// Newest profile first; the behavior of the original discover feed
pub struct NewestFirst;

impl CandidateOrdering for NewestFirst {
    fn arrange(&self, candidates: &mut Vec<DogProfile>) {
        // The store already returns newest-first; keep it stable
        candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    }

    fn name(&self) -> &'static str {
        "newest"
    }
}

/// Uniformly shuffled candidates
pub struct Shuffled;

impl CandidateOrdering for Shuffled {
    fn arrange(&self, candidates: &mut Vec<DogProfile>) {
        let mut rng = SmallRng::from_entropy();
        candidates.shuffle(&mut rng);
    }

    fn name(&self) -> &'static str {
        "shuffled"
    }
}

/// Look up a strategy by its configured name
pub fn from_name(name: &str) -> Option<Arc<dyn CandidateOrdering>> {
    match name {
        "newest" => Some(Arc::new(NewestFirst)),
        "shuffled" => Some(Arc::new(Shuffled)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn profiles(n: usize) -> Vec<DogProfile> {
        (0..n)
            .map(|i| DogProfile {
                id: Uuid::new_v4(),
                owner_user_id: Uuid::new_v4(),
                name: format!("Dog {}", i),
                age: None,
                gender: None,
                breed: None,
                personality: None,
                bio: None,
                photo_ref: None,
                created_at: Utc::now() + Duration::seconds(i as i64),
            })
            .collect()
    }

    #[test]
    fn test_newest_first_orders_by_created_at() {
        let mut candidates = profiles(5);
        NewestFirst.arrange(&mut candidates);

        for pair in candidates.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn test_shuffled_keeps_all_candidates() {
        let mut candidates = profiles(50);
        let ids: std::collections::HashSet<Uuid> = candidates.iter().map(|p| p.id).collect();

        Shuffled.arrange(&mut candidates);

        assert_eq!(candidates.len(), 50);
        assert!(candidates.iter().all(|p| ids.contains(&p.id)));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("newest").unwrap().name(), "newest");
        assert_eq!(from_name("shuffled").unwrap().name(), "shuffled");
        assert!(from_name("psychic").is_none());
    }
}
