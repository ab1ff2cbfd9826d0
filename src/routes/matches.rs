use crate::core::{MatchError, Matcher};
use crate::models::{
    AllocationResponse, ErrorResponse, HealthResponse, MatchesResponse, TopCandidatesRequest,
    TopMatchesRequest,
};
use crate::services::DataStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub matcher: Matcher,
    pub max_top_k: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/candidate", web::post().to(top_matches_for_candidate))
        .route("/matches/internship", web::post().to(top_candidates_for_internship))
        .route("/allocations/run", web::post().to(run_allocation));
}

fn match_error_response(err: MatchError) -> HttpResponse {
    match err {
        MatchError::NotFound(ref message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Not found".to_string(),
            message: message.clone(),
            status_code: 404,
        }),
        MatchError::InvalidRange(ref message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid range".to_string(),
            message: message.clone(),
            status_code: 400,
        }),
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Top matches for one candidate
///
/// POST /api/v1/matches/candidate
///
/// Request body:
/// ```json
/// {
///   "candidateId": "string",
///   "topK": 5
/// }
/// ```
async fn top_matches_for_candidate(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top-matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let top_k = (req.top_k as usize).min(state.max_top_k);
    tracing::info!(
        "Finding top {} matches for candidate {}",
        top_k,
        req.candidate_id
    );

    let matches = state
        .matcher
        .match_candidates(state.store.candidates(), state.store.internships());

    match state
        .matcher
        .get_top_matches_for_candidate(&req.candidate_id, &matches, top_k)
    {
        Ok(selected) => {
            let total_results = selected.len();
            HttpResponse::Ok().json(MatchesResponse {
                matches: selected,
                total_results,
            })
        }
        Err(e) => match_error_response(e),
    }
}

/// Top candidates for one internship
///
/// POST /api/v1/matches/internship
///
/// Request body:
/// ```json
/// {
///   "internshipId": "string",
///   "topK": 5
/// }
/// ```
async fn top_candidates_for_internship(
    state: web::Data<AppState>,
    req: web::Json<TopCandidatesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top-candidates request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let top_k = (req.top_k as usize).min(state.max_top_k);
    tracing::info!(
        "Finding top {} candidates for internship {}",
        top_k,
        req.internship_id
    );

    let matches = state
        .matcher
        .match_candidates(state.store.candidates(), state.store.internships());

    match state
        .matcher
        .get_top_candidates_for_internship(&req.internship_id, &matches, top_k)
    {
        Ok(selected) => {
            let total_results = selected.len();
            HttpResponse::Ok().json(MatchesResponse {
                matches: selected,
                total_results,
            })
        }
        Err(e) => match_error_response(e),
    }
}

/// Score the full snapshot and run quota-constrained allocation
///
/// POST /api/v1/allocations/run
async fn run_allocation(state: web::Data<AppState>) -> impl Responder {
    let matches = state
        .matcher
        .match_candidates(state.store.candidates(), state.store.internships());

    match state.matcher.allocate(state.store.internships(), &matches) {
        Ok(allocations) => {
            let total_allocated = allocations.iter().map(|a| a.selected.len()).sum();
            tracing::info!(
                "Allocation run complete: {} matches scored, {} positions filled across {} internships",
                matches.len(),
                total_allocated,
                allocations.len()
            );
            HttpResponse::Ok().json(AllocationResponse {
                allocations,
                total_matches: matches.len(),
                total_allocated,
            })
        }
        Err(e) => {
            tracing::error!("Allocation run failed: {}", e);
            match_error_response(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
