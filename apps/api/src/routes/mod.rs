pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/criteria/:job_type",
            get(handlers::handle_get_criteria),
        )
        .route("/api/v1/evaluations/score", post(handlers::handle_score))
        .route(
            "/api/v1/aptitude/analyze",
            post(handlers::handle_analyze_aptitude),
        )
        .route(
            "/api/v1/matching/similar",
            post(handlers::handle_find_similar),
        )
        .route("/api/v1/matching/predict", post(handlers::handle_predict))
        .route(
            "/api/v1/matching/predict/batch",
            post(handlers::handle_predict_batch),
        )
        .route("/api/v1/candidates/assess", post(handlers::handle_assess))
        .with_state(state)
}
