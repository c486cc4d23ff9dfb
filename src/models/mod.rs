// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Decision, DecisionOutcome, DecisionStats, DogProfile, MatchPair, MatchStatus, StoredMatch,
};
pub use requests::{
    CreateProfileRequest, DeleteProfileRequest, DogIdQuery, RecordDecisionRequest,
    UpdateProfileRequest,
};
pub use responses::{
    ErrorResponse, HealthResponse, MatchListResponse, NextCandidateResponse,
    RecordDecisionResponse, ResetDecisionsResponse,
};
