// HTTP-level tests for the feed API, using the in-memory store

use actix_web::{test, web, App};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use tindog_feed::core::{DecisionRecorder, FeedSelector, NewestFirst};
use tindog_feed::models::{
    DogProfile, MatchListResponse, NextCandidateResponse, RecordDecisionResponse,
};
use tindog_feed::routes::{self, AppState};
use tindog_feed::services::{LogNotifier, MemoryStore, ProfileCache};

fn test_state() -> AppState {
    AppState {
        store: Arc::new(MemoryStore::new()),
        cache: ProfileCache::new(100, 60),
        feed: FeedSelector::new(Arc::new(NewestFirst)),
        recorder: DecisionRecorder::new(Arc::new(LogNotifier)),
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(routes::configure_routes),
        )
        .await
    };
}

macro_rules! create_dog {
    ($app:expr, $owner:expr, $name:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/profiles")
            .set_json(json!({
                "ownerUserId": $owner,
                "name": $name,
                "age": 4,
                "breed": "terrier",
                "photoRef": "/static/uploads/dog.jpg",
            }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 201);
        let profile: DogProfile = test::read_body_json(resp).await;
        profile
    }};
}

#[actix_web::test]
async fn test_profile_crud_roundtrip() {
    let state = test_state();
    let app = test_app!(state);

    let owner = Uuid::new_v4();
    let created = create_dog!(app, owner, "Rex");
    assert_eq!(created.name, "Rex");
    assert_eq!(created.owner_user_id, owner);

    // Read back (second read hits the cache)
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/profiles/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let fetched: DogProfile = test::read_body_json(resp).await;
        assert_eq!(fetched.id, created.id);
    }

    // Owner edit
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .set_json(json!({
            "ownerUserId": owner,
            "name": "Rexford",
            "age": 5,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: DogProfile = test::read_body_json(resp).await;
    assert_eq!(updated.name, "Rexford");

    // The cache must not serve the stale profile
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .to_request();
    let fetched: DogProfile = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched.name, "Rexford");

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .set_json(json!({ "ownerUserId": owner }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_profile_edit_by_non_owner_is_forbidden() {
    let state = test_state();
    let app = test_app!(state);

    let created = create_dog!(app, Uuid::new_v4(), "Rex");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/profiles/{}", created.id))
        .set_json(json!({
            "ownerUserId": Uuid::new_v4(),
            "name": "Stolen",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}

#[actix_web::test]
async fn test_create_profile_rejects_empty_name() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/v1/profiles")
        .set_json(json!({
            "ownerUserId": Uuid::new_v4(),
            "name": "",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_feed_and_decisions_flow() {
    let state = test_state();
    let app = test_app!(state);

    let rex = create_dog!(app, Uuid::new_v4(), "Rex");
    let luna = create_dog!(app, Uuid::new_v4(), "Luna");

    // Rex sees Luna
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/feed/next?dogId={}", rex.id))
        .to_request();
    let feed: NextCandidateResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(!feed.exhausted);
    assert_eq!(feed.candidate.unwrap().id, luna.id);

    // Rex likes Luna: no match yet
    let req = test::TestRequest::post()
        .uri("/api/v1/decisions")
        .set_json(json!({
            "sourceDogId": rex.id,
            "targetDogId": luna.id,
            "outcome": "like",
        }))
        .to_request();
    let decision: RecordDecisionResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(!decision.matched);

    // Rex's feed is now exhausted
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/feed/next?dogId={}", rex.id))
        .to_request();
    let feed: NextCandidateResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(feed.exhausted);
    assert!(feed.candidate.is_none());

    // Luna likes Rex back: match
    let req = test::TestRequest::post()
        .uri("/api/v1/decisions")
        .set_json(json!({
            "sourceDogId": luna.id,
            "targetDogId": rex.id,
            "outcome": "like",
        }))
        .to_request();
    let decision: RecordDecisionResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(decision.matched);
    let pair = decision.pair.unwrap();
    assert!(pair.contains(rex.id) && pair.contains(luna.id));

    // Both dogs see the match
    for dog_id in [rex.id, luna.id] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/matches?dogId={}", dog_id))
            .to_request();
        let matches: MatchListResponse =
            test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(matches.count, 1);
    }
}

#[actix_web::test]
async fn test_decision_error_taxonomy() {
    let state = test_state();
    let app = test_app!(state);

    let rex = create_dog!(app, Uuid::new_v4(), "Rex");
    let luna = create_dog!(app, Uuid::new_v4(), "Luna");

    // Malformed outcome
    let req = test::TestRequest::post()
        .uri("/api/v1/decisions")
        .set_json(json!({
            "sourceDogId": rex.id,
            "targetDogId": luna.id,
            "outcome": "superlike",
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Self-decision
    let req = test::TestRequest::post()
        .uri("/api/v1/decisions")
        .set_json(json!({
            "sourceDogId": rex.id,
            "targetDogId": rex.id,
            "outcome": "like",
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    // Unknown target
    let req = test::TestRequest::post()
        .uri("/api/v1/decisions")
        .set_json(json!({
            "sourceDogId": rex.id,
            "targetDogId": Uuid::new_v4(),
            "outcome": "pass",
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_reset_and_stats() {
    let state = test_state();
    let app = test_app!(state);

    let rex = create_dog!(app, Uuid::new_v4(), "Rex");
    let luna = create_dog!(app, Uuid::new_v4(), "Luna");
    let milo = create_dog!(app, Uuid::new_v4(), "Milo");

    for (target, outcome) in [(luna.id, "like"), (milo.id, "pass")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/decisions")
            .set_json(json!({
                "sourceDogId": rex.id,
                "targetDogId": target,
                "outcome": outcome,
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/decisions/stats?dogId={}", rex.id))
        .to_request();
    let stats: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["liked"], 1);
    assert_eq!(stats["passed"], 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/decisions?dogId={}", rex.id))
        .to_request();
    let reset: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(reset["cleared"], 2);

    // Feed restarts after the reset
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/feed/next?dogId={}", rex.id))
        .to_request();
    let feed: NextCandidateResponse =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert!(!feed.exhausted);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = test_state();
    let app = test_app!(state);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}
