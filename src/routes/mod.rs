// Route exports
pub mod feed;
pub mod profiles;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{DecisionRecorder, EngineError, FeedSelector};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{ProfileCache, ProfileStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub cache: ProfileCache,
    pub feed: FeedSelector,
    pub recorder: DecisionRecorder,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(profiles::configure)
            .configure(feed::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);
    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Map engine errors onto the HTTP error taxonomy
pub(crate) fn engine_error_response(err: EngineError) -> HttpResponse {
    match err {
        EngineError::NotFound(id) => HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("Profile {} no longer available", id),
            status_code: 404,
        }),
        EngineError::InvalidDecision(reason) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_decision".to_string(),
            message: reason,
            status_code: 400,
        }),
        EngineError::Storage(message) => {
            tracing::error!("Storage failure: {}", message);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "storage_unavailable".to_string(),
                message,
                status_code: 503,
            })
        }
    }
}
