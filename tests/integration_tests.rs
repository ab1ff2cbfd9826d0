// Integration tests for the intern-match service

use actix_web::{test, web, App};
use intern_match::core::Matcher;
use intern_match::models::{AllocationResponse, ErrorResponse, HealthResponse, MatchesResponse};
use intern_match::routes::matches::AppState;
use intern_match::routes::configure_routes;
use intern_match::services::{fixtures, DataStore};
use std::sync::Arc;

fn app_state() -> AppState {
    let store = DataStore::new(fixtures::sample_candidates(), fixtures::sample_internships())
        .expect("sample data is valid");
    AppState {
        store: Arc::new(store),
        matcher: Matcher::with_defaults(),
        max_top_k: 100,
    }
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let response: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(response.status, "healthy");
}

#[actix_web::test]
async fn test_top_matches_for_candidate_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/candidate")
        .set_json(serde_json::json!({ "candidateId": "C001", "topK": 3 }))
        .to_request();
    let response: MatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(response.total_results <= 3);
    assert!(!response.matches.is_empty());
    for m in &response.matches {
        assert_eq!(m.candidate_id, "C001");
    }
    for pair in response.matches.windows(2) {
        assert!(pair[0].total_score >= pair[1].total_score);
    }
}

#[actix_web::test]
async fn test_top_candidates_for_internship_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/internship")
        .set_json(serde_json::json!({ "internshipId": "I103", "topK": 10 }))
        .to_request();
    let response: MatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert!(!response.matches.is_empty());
    for m in &response.matches {
        assert_eq!(m.internship_id, "I103");
    }
}

#[actix_web::test]
async fn test_unknown_candidate_returns_404() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/candidate")
        .set_json(serde_json::json!({ "candidateId": "C999", "topK": 3 }))
        .to_request();
    let response = test::call_service(&app, req).await;

    assert_eq!(response.status(), 404);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.status_code, 404);
}

#[actix_web::test]
async fn test_empty_candidate_id_fails_validation() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/candidate")
        .set_json(serde_json::json!({ "candidateId": "", "topK": 3 }))
        .to_request();
    let response = test::call_service(&app, req).await;

    assert_eq!(response.status(), 400);
}

#[actix_web::test]
async fn test_allocation_run_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/allocations/run")
        .to_request();
    let response: AllocationResponse = test::call_and_read_body_json(&app, req).await;

    // Full cross product of the sample snapshot: 5 candidates x 5 internships
    assert_eq!(response.total_matches, 25);
    assert_eq!(response.allocations.len(), 5);
    assert!(response.total_allocated > 0);

    for allocation in &response.allocations {
        assert!(allocation.fill.filled <= allocation.fill.capacity);
        assert!(allocation.fill.rural_filled <= allocation.fill.rural_slots);
        assert_eq!(allocation.selected.len() as u32, allocation.fill.filled);
    }
}

#[actix_web::test]
async fn test_allocation_prioritizes_rural_candidates_for_quota() {
    // The rural development internship (I103) reserves half its capacity;
    // the rural OBC candidate C004 must be among the selected.
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/allocations/run")
        .to_request();
    let response: AllocationResponse = test::call_and_read_body_json(&app, req).await;

    let rural = response
        .allocations
        .iter()
        .find(|a| a.internship_id == "I103")
        .expect("I103 allocation present");

    assert!(rural
        .selected
        .iter()
        .any(|m| m.candidate_id == "C004" && m.quota_relevant));
    assert!(rural.fill.rural_filled >= 1);
}
