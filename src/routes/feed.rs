use actix_web::{web, HttpResponse, Responder};

use crate::core::NextCandidate;
use crate::models::{
    DecisionOutcome, DogIdQuery, ErrorResponse, MatchListResponse, NextCandidateResponse,
    RecordDecisionRequest, RecordDecisionResponse, ResetDecisionsResponse,
};
use crate::routes::{engine_error_response, AppState};

/// Configure feed, decision and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/feed/next", web::get().to(next_candidate))
        .route("/decisions", web::post().to(record_decision))
        .route("/decisions", web::delete().to(reset_decisions))
        .route("/decisions/stats", web::get().to(decision_stats))
        .route("/matches", web::get().to(list_matches));
}

/// Next candidate endpoint
///
/// GET /api/v1/feed/next?dogId={dogId}
///
/// Returns the next undecided candidate for the given dog, or
/// `{"exhausted": true}` when none remain.
async fn next_candidate(state: web::Data<AppState>, query: web::Query<DogIdQuery>) -> impl Responder {
    match state.feed.next_candidate(state.store.as_ref(), query.dog_id).await {
        Ok(NextCandidate::Candidate(profile)) => HttpResponse::Ok().json(NextCandidateResponse {
            candidate: Some(profile),
            exhausted: false,
        }),
        Ok(NextCandidate::Exhausted) => HttpResponse::Ok().json(NextCandidateResponse {
            candidate: None,
            exhausted: true,
        }),
        Err(e) => engine_error_response(e),
    }
}

/// Record decision endpoint
///
/// POST /api/v1/decisions
///
/// Request body:
/// ```json
/// {
///   "sourceDogId": "uuid",
///   "targetDogId": "uuid",
///   "outcome": "like|pass"
/// }
/// ```
async fn record_decision(
    state: web::Data<AppState>,
    req: web::Json<RecordDecisionRequest>,
) -> impl Responder {
    let outcome = match DecisionOutcome::parse(&req.outcome) {
        Some(outcome) => outcome,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_decision".to_string(),
                message: "Outcome must be one of: like, pass".to_string(),
                status_code: 400,
            });
        }
    };

    match state
        .recorder
        .record(state.store.as_ref(), req.source_dog_id, req.target_dog_id, outcome)
        .await
    {
        Ok(status) => {
            tracing::debug!(
                "Decision {} -> {} ({:?}), matched={}",
                req.source_dog_id,
                req.target_dog_id,
                outcome,
                status.matched
            );
            HttpResponse::Ok().json(RecordDecisionResponse {
                matched: status.matched,
                pair: status.pair,
            })
        }
        Err(e) => engine_error_response(e),
    }
}

/// Reset decisions endpoint; clears a dog's outgoing decisions so its feed restarts
///
/// DELETE /api/v1/decisions?dogId={dogId}
async fn reset_decisions(state: web::Data<AppState>, query: web::Query<DogIdQuery>) -> impl Responder {
    if let Err(e) = state.store.get_profile(query.dog_id).await {
        return engine_error_response(e.into());
    }

    match state.store.clear_decisions(query.dog_id).await {
        Ok(cleared) => HttpResponse::Ok().json(ResetDecisionsResponse {
            dog_id: query.dog_id,
            cleared,
        }),
        Err(e) => engine_error_response(e.into()),
    }
}

/// Decision stats endpoint
///
/// GET /api/v1/decisions/stats?dogId={dogId}
async fn decision_stats(state: web::Data<AppState>, query: web::Query<DogIdQuery>) -> impl Responder {
    match state.store.decision_stats(query.dog_id).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => engine_error_response(e.into()),
    }
}

/// List matches endpoint
///
/// GET /api/v1/matches?dogId={dogId}
async fn list_matches(state: web::Data<AppState>, query: web::Query<DogIdQuery>) -> impl Responder {
    match state.store.list_matches(query.dog_id).await {
        Ok(matches) => {
            let count = matches.len();
            HttpResponse::Ok().json(MatchListResponse {
                dog_id: query.dog_id,
                matches,
                count,
            })
        }
        Err(e) => engine_error_response(e.into()),
    }
}
