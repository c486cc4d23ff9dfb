use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    CreateProfileRequest, DeleteProfileRequest, DogProfile, ErrorResponse, UpdateProfileRequest,
};
use crate::routes::{engine_error_response, AppState};
use crate::services::StoreError;

/// Configure profile CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::put().to(update_profile))
        .route("/profiles/{id}", web::delete().to(delete_profile));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "validation_failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn forbidden(dog_id: Uuid) -> HttpResponse {
    HttpResponse::Forbidden().json(ErrorResponse {
        error: "forbidden".to_string(),
        message: format!("Profile {} belongs to another owner", dog_id),
        status_code: 403,
    })
}

/// Create profile endpoint
///
/// POST /api/v1/profiles
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_profile: {:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let profile = DogProfile {
        id: Uuid::new_v4(),
        owner_user_id: req.owner_user_id,
        name: req.name,
        age: req.age,
        gender: req.gender,
        breed: req.breed,
        personality: req.personality,
        bio: req.bio,
        photo_ref: req.photo_ref,
        created_at: Utc::now(),
    };

    match state.store.create_profile(&profile).await {
        Ok(()) => {
            tracing::info!("Created profile {} ({})", profile.id, profile.name);
            HttpResponse::Created().json(profile)
        }
        Err(e) => engine_error_response(e.into()),
    }
}

/// Get profile endpoint, read-through cached
///
/// GET /api/v1/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();

    if let Some(profile) = state.cache.get(id).await {
        return HttpResponse::Ok().json(profile);
    }

    match state.store.get_profile(id).await {
        Ok(profile) => {
            state.cache.insert(profile.clone()).await;
            HttpResponse::Ok().json(profile)
        }
        Err(e) => engine_error_response(e.into()),
    }
}

/// Edit profile endpoint; owner-checked
///
/// PUT /api/v1/profiles/{id}
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    let req = req.into_inner();

    let existing = match state.store.get_profile(id).await {
        Ok(profile) => profile,
        Err(e) => return engine_error_response(e.into()),
    };
    if existing.owner_user_id != req.owner_user_id {
        return forbidden(id);
    }

    let updated = DogProfile {
        id,
        owner_user_id: existing.owner_user_id,
        name: req.name,
        age: req.age,
        gender: req.gender,
        breed: req.breed,
        personality: req.personality,
        bio: req.bio,
        photo_ref: req.photo_ref,
        created_at: existing.created_at,
    };

    match state.store.update_profile(&updated).await {
        Ok(()) => {
            state.cache.invalidate(id).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => engine_error_response(e.into()),
    }
}

/// Delete profile endpoint; owner-checked, cascades decisions and matches
///
/// DELETE /api/v1/profiles/{id}
async fn delete_profile(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<DeleteProfileRequest>,
) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_profile(id).await {
        Ok(profile) if profile.owner_user_id != req.owner_user_id => return forbidden(id),
        Ok(_) => {}
        Err(StoreError::NotFound(_)) => {
            // Deleting an absent profile is a no-op for the caller
            return HttpResponse::NoContent().finish();
        }
        Err(e) => return engine_error_response(e.into()),
    }

    match state.store.delete_profile(id).await {
        Ok(()) => {
            state.cache.invalidate(id).await;
            HttpResponse::NoContent().finish()
        }
        Err(e) => engine_error_response(e.into()),
    }
}
