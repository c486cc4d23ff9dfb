use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dog profile as shown in the swipe feed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DogProfile {
    pub id: Uuid,
    #[serde(rename = "ownerUserId")]
    pub owner_user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub age: Option<i16>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "photoRef", default)]
    pub photo_ref: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Outcome of a swipe decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "decision_outcome", rename_all = "lowercase")]
pub enum DecisionOutcome {
    Like,
    Pass,
}

impl DecisionOutcome {
    /// Parse a wire-format outcome string ("like" or "pass")
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "like" => Some(Self::Like),
            "pass" => Some(Self::Pass),
            _ => None,
        }
    }
}

/// A recorded swipe from one dog toward another
///
/// Decisions are unique per ordered (source, target) pair; recording a
/// second decision for the same pair overwrites the first.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Decision {
    pub source_dog_id: Uuid,
    pub target_dog_id: Uuid,
    pub outcome: DecisionOutcome,
    pub decided_at: DateTime<Utc>,
}

/// Normalized unordered pair of matched dogs
///
/// The constructor orders the ids so that `dog_a <= dog_b`, giving every
/// unordered pair exactly one representation. That single representation is
/// what keeps the `matches` table and notification dedup idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPair {
    #[serde(rename = "dogA")]
    pub dog_a: Uuid,
    #[serde(rename = "dogB")]
    pub dog_b: Uuid,
}

impl MatchPair {
    pub fn new(x: Uuid, y: Uuid) -> Self {
        if x <= y {
            Self { dog_a: x, dog_b: y }
        } else {
            Self { dog_a: y, dog_b: x }
        }
    }

    pub fn contains(&self, dog_id: Uuid) -> bool {
        self.dog_a == dog_id || self.dog_b == dog_id
    }
}

/// A mutual like cached for fast lookup
///
/// Derived from the two directed like decisions, which remain the source of
/// truth.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredMatch {
    #[serde(rename = "dogA")]
    pub dog_a: Uuid,
    #[serde(rename = "dogB")]
    pub dog_b: Uuid,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
}

impl StoredMatch {
    pub fn pair(&self) -> MatchPair {
        MatchPair::new(self.dog_a, self.dog_b)
    }
}

/// Result of recording a decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStatus {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<MatchPair>,
}

impl MatchStatus {
    pub fn unmatched() -> Self {
        Self {
            matched: false,
            pair: None,
        }
    }

    pub fn matched(pair: MatchPair) -> Self {
        Self {
            matched: true,
            pair: Some(pair),
        }
    }
}

/// Aggregate counts over a dog's outgoing decisions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionStats {
    #[serde(rename = "dogId")]
    pub dog_id: Uuid,
    pub total: i64,
    pub liked: i64,
    pub passed: i64,
    #[serde(rename = "lastDecidedAt")]
    pub last_decided_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_pair_is_normalized() {
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();

        let p1 = MatchPair::new(x, y);
        let p2 = MatchPair::new(y, x);

        assert_eq!(p1, p2);
        assert!(p1.dog_a <= p1.dog_b);
        assert!(p1.contains(x));
        assert!(p1.contains(y));
    }

    #[test]
    fn test_outcome_parsing() {
        assert_eq!(DecisionOutcome::parse("like"), Some(DecisionOutcome::Like));
        assert_eq!(DecisionOutcome::parse("PASS"), Some(DecisionOutcome::Pass));
        assert_eq!(DecisionOutcome::parse("superlike"), None);
        assert_eq!(DecisionOutcome::parse(""), None);
    }

    #[test]
    fn test_outcome_serde_is_lowercase() {
        let json = serde_json::to_string(&DecisionOutcome::Like).unwrap();
        assert_eq!(json, "\"like\"");
    }
}
