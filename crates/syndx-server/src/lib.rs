//! syndx-server library root.
//!
//! The HTTP service is assembled here so integration tests can drive the
//! router directly without binding a socket.

pub mod audit;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pipeline;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the service router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Stateless rule engine
        .route("/vitals/normalize", post(routes::rules::normalize_vitals))
        .route("/triage", post(routes::rules::triage))
        .route("/classify", post(routes::rules::classify))
        .route("/screening", post(routes::rules::screening))
        .route("/discharge", post(routes::rules::discharge))
        // Full pipeline, persists a case
        .route("/diagnose", post(routes::diagnose::diagnose))
        // Surveillance over the case log
        .route("/cases", get(routes::cases::list_cases))
        .route("/outbreak", get(routes::surveillance::outbreak))
        .route("/surveillance/summary", get(routes::surveillance::summary))
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
