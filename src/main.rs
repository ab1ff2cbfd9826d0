mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use config::Settings;
use core::Matcher;
use models::ScoringWeights;
use routes::matches::AppState;
use services::DataStore;
use std::sync::Arc;
use tracing::{error, info};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting intern-match allocation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Load the candidate/internship snapshot
    let store = match &settings.data.snapshot_path {
        Some(path) => {
            let store = DataStore::load_from_file(path).unwrap_or_else(|e| {
                error!("Failed to load snapshot from {}: {}", path, e);
                panic!("Snapshot error: {}", e);
            });
            info!(
                "Snapshot loaded from {}: {} candidates, {} internships",
                path,
                store.candidates().len(),
                store.internships().len()
            );
            store
        }
        None => {
            info!("No snapshot configured, using built-in sample data");
            DataStore::new(
                services::fixtures::sample_candidates(),
                services::fixtures::sample_internships(),
            )
            .unwrap_or_else(|e| {
                error!("Sample data failed validation: {}", e);
                panic!("Sample data error: {}", e);
            })
        }
    };

    // Initialize matcher with configured weights
    let weights = ScoringWeights {
        skill: settings.scoring.weights.skill,
        location: settings.scoring.weights.location,
        sector: settings.scoring.weights.sector,
        eligibility: settings.scoring.weights.eligibility,
        boost: settings.scoring.weights.boost,
    };

    let matcher = Matcher::new(weights, settings.matching.preferred_categories.clone());

    info!("Matcher initialized with weights: {:?}", weights);

    // Build application state
    let app_state = AppState {
        store: Arc::new(store),
        matcher,
        max_top_k: settings.matching.max_top_k as usize,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
