use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to create a dog profile
///
/// The owner id is supplied by the (already-authenticated) caller; the
/// engine never sees credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[serde(alias = "owner_user_id", rename = "ownerUserId")]
    pub owner_user_id: Uuid,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 0, max = 30))]
    #[serde(default)]
    pub age: Option<i16>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(alias = "photo_ref", rename = "photoRef", default)]
    pub photo_ref: Option<String>,
}

/// Request to edit a dog profile; only the owner may edit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(alias = "owner_user_id", rename = "ownerUserId")]
    pub owner_user_id: Uuid,
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 0, max = 30))]
    #[serde(default)]
    pub age: Option<i16>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(alias = "photo_ref", rename = "photoRef", default)]
    pub photo_ref: Option<String>,
}

/// Request to delete a profile; owner-checked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProfileRequest {
    #[serde(alias = "owner_user_id", rename = "ownerUserId")]
    pub owner_user_id: Uuid,
}

/// Request to record a swipe decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDecisionRequest {
    #[serde(alias = "source_dog_id", rename = "sourceDogId")]
    pub source_dog_id: Uuid,
    #[serde(alias = "target_dog_id", rename = "targetDogId")]
    pub target_dog_id: Uuid,
    pub outcome: String,
}

/// Query parameters for feed, decision and match lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogIdQuery {
    #[serde(alias = "dog_id", rename = "dogId")]
    pub dog_id: Uuid,
}
