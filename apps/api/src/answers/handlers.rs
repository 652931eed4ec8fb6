//! Axum route handlers for the Answers API.
//!
//! This is the calling layer around the orchestrator: it validates input,
//! picks the credential, and appends to the session's interaction log.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::answers::orchestrator::{credential_is_valid, AnswerEngine};
use crate::answers::validation::{question_stats, validate_question, QuestionStats};
use crate::errors::AppError;
use crate::llm_client::MODEL;
use crate::models::answer::{AnswerOutcome, AnswerSource};
use crate::models::interaction::InteractionRecord;
use crate::state::AppState;
use crate::topics::catalog::TOPICS;
use crate::topics::resolver::display_name;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question: String,
    /// Omit to start a new session; the response carries the issued id.
    pub session_id: Option<Uuid>,
    /// Per-request Gemini key. Overrides the server default when present.
    pub api_key: Option<String>,
}

/// Wire form of an `AnswerOutcome`. A not-found result is a 200 with `found: false`.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<AnswerSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub session_id: Uuid,
    pub questions_asked: usize,
    pub stats: QuestionStats,
}

impl AnswerResponse {
    fn new(
        outcome: AnswerOutcome,
        session_id: Uuid,
        questions_asked: usize,
        stats: QuestionStats,
    ) -> Self {
        let found = outcome.is_found();
        let source = outcome.source();
        let (answer, topic, message) = match outcome {
            AnswerOutcome::Remote { answer } => (Some(answer), None, None),
            AnswerOutcome::Local { topic, answer } => {
                (Some(answer), Some(display_name(topic)), None)
            }
            AnswerOutcome::NotFound { message } => (None, None, Some(message)),
        };

        Self {
            found,
            answer,
            source,
            topic,
            message,
            session_id,
            questions_asked,
            stats,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub remote_available: bool,
    pub model: &'static str,
    pub offline_topics: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    pub questions_asked: usize,
    pub records: Vec<InteractionRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/answers
///
/// Validates the question, runs the orchestrator, and records answered
/// questions in the session log.
pub async fn handle_generate_answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    let question = validate_question(&request.question)?;
    let stats = question_stats(question);

    let engine = build_engine(&state, request.api_key);
    info!(
        "Answering question ({} words, remote_available={})",
        stats.word_count,
        engine.remote_available()
    );
    let outcome = engine.generate_answer(question).await;

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let questions_asked = match outcome.source() {
        Some(source) => {
            info!("Session {session_id}: answered from {}", source.as_str());
            state.sessions.record(session_id, question, source).await
        }
        None => state.sessions.count(session_id).await,
    };

    Ok(Json(AnswerResponse::new(
        outcome,
        session_id,
        questions_asked,
        stats,
    )))
}

/// POST /api/v1/answers/download
///
/// Returns the answer as a plain-text attachment.
pub async fn handle_download_answer(
    Json(request): Json<DownloadRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(Utc::now())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        request.answer,
    ))
}

/// GET /api/v1/status
///
/// Reports whether the server-default key enables the remote model.
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        remote_available: credential_is_valid(state.config.gemini_api_key.as_deref()),
        model: MODEL,
        offline_topics: TOPICS.len(),
    })
}

/// GET /api/v1/sessions/:id/history
///
/// Unknown sessions report an empty history.
pub async fn handle_session_history(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Json<HistoryResponse> {
    let records = state.sessions.records(session_id).await;

    Json(HistoryResponse {
        session_id,
        questions_asked: records.len(),
        records,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// A fresh engine per request. A non-blank request key takes precedence over
/// the server default.
fn build_engine(state: &AppState, api_key: Option<String>) -> AnswerEngine {
    let timeout = Duration::from_secs(state.config.remote_timeout_secs);

    match api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
    {
        Some(key) => {
            let provider = Arc::new(state.llm.with_api_key(key.clone()));
            AnswerEngine::new(Some(&key), provider, timeout)
        }
        None => AnswerEngine::new(
            state.config.gemini_api_key.as_deref(),
            Arc::new(state.llm.clone()),
            timeout,
        ),
    }
}

fn download_filename(now: DateTime<Utc>) -> String {
    format!("VTU_Answer_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stats() -> QuestionStats {
        question_stats("Explain data structures")
    }

    #[test]
    fn test_download_filename_format() {
        let now = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(download_filename(now), "VTU_Answer_20250307_090502.txt");
    }

    #[test]
    fn test_local_response_title_cases_topic() {
        let outcome = AnswerOutcome::Local {
            topic: "operating system",
            answer: "formatted".to_string(),
        };
        let json = serde_json::to_value(AnswerResponse::new(outcome, Uuid::nil(), 1, stats()))
            .unwrap();

        assert_eq!(json["found"], true);
        assert_eq!(json["source"], "local-database");
        assert_eq!(json["topic"], "Operating System");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_remote_response_has_no_topic() {
        let outcome = AnswerOutcome::Remote {
            answer: "raw".to_string(),
        };
        let json = serde_json::to_value(AnswerResponse::new(outcome, Uuid::nil(), 3, stats()))
            .unwrap();

        assert_eq!(json["source"], "remote-model");
        assert_eq!(json["answer"], "raw");
        assert_eq!(json["questions_asked"], 3);
        assert!(json.get("topic").is_none());
    }

    #[test]
    fn test_not_found_response_carries_message_only() {
        let outcome = AnswerOutcome::NotFound {
            message: "Topic not found! Available: dbms".to_string(),
        };
        let json = serde_json::to_value(AnswerResponse::new(outcome, Uuid::nil(), 0, stats()))
            .unwrap();

        assert_eq!(json["found"], false);
        assert_eq!(json["message"], "Topic not found! Available: dbms");
        assert!(json.get("answer").is_none());
        assert!(json.get("source").is_none());
    }
}
