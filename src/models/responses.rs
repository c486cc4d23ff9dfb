use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{DogProfile, MatchPair, StoredMatch};

/// Response for the next-candidate endpoint
///
/// `exhausted: true` with no candidate is a normal terminal feed state, not
/// an error; the UI renders it as "no more dogs".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextCandidateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<DogProfile>,
    pub exhausted: bool,
}

/// Response for the record-decision endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDecisionResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair: Option<MatchPair>,
}

/// Response for the reset-decisions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetDecisionsResponse {
    #[serde(rename = "dogId")]
    pub dog_id: Uuid,
    pub cleared: u64,
}

/// Response listing a dog's matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    #[serde(rename = "dogId")]
    pub dog_id: Uuid,
    pub matches: Vec<StoredMatch>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
