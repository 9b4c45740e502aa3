pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::pdf;
use crate::state::AppState;

/// Base64-encoded résumé PDFs routinely exceed axum's 2 MB default body
/// limit, so the whole API accepts up to 10 MB.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/survey", post(handlers::handle_submit_survey))
        .route("/api/survey/stats", get(handlers::handle_survey_stats))
        .route("/api/parse-pdf", post(pdf::handle_parse_pdf))
        .route("/api/analyze-resume", post(handlers::handle_analyze_resume))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
