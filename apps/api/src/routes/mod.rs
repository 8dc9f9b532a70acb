pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::matching::handlers as matching;
use crate::roster::handlers as roster;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Shortlisting
        .route("/api/consultants", get(matching::handle_shortlist))
        .route("/api/consultants/:id", get(matching::handle_get_consultant))
        .route("/api/filters", get(matching::handle_filter_catalog))
        // Fit evaluation
        .route("/api/evaluate", post(evaluation::handle_evaluate))
        .route("/api/evaluate/batch", post(evaluation::handle_evaluate_batch))
        // Roster administration
        .route("/api/roster/reload", post(roster::handle_reload))
        .with_state(state)
}
