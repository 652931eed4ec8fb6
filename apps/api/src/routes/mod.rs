pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::answers::handlers as answers;
use crate::state::AppState;
use crate::topics::handlers as topics;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/status", get(answers::handle_status))
        // Offline catalog
        .route("/api/v1/topics", get(topics::handle_list_topics))
        .route("/api/v1/samples", get(topics::handle_sample_questions))
        // Answers
        .route("/api/v1/answers", post(answers::handle_generate_answer))
        .route(
            "/api/v1/answers/download",
            post(answers::handle_download_answer),
        )
        .route(
            "/api/v1/sessions/:id/history",
            get(answers::handle_session_history),
        )
        .with_state(state)
}
