//! Caller-side question checks. Rejected questions never reach the orchestrator.

use serde::Serialize;

use crate::errors::AppError;

/// Shortest accepted question, in characters after trimming.
pub const MIN_QUESTION_CHARS: usize = 5;
/// Questions with at least this many words count as detailed.
const DETAILED_WORD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionStats {
    pub word_count: usize,
    pub is_detailed: bool,
}

/// Returns the trimmed question, or a validation error if it is too short.
pub fn validate_question(question: &str) -> Result<&str, AppError> {
    let trimmed = question.trim();
    if trimmed.chars().count() < MIN_QUESTION_CHARS {
        return Err(AppError::Validation(
            "Please enter a valid question!".to_string(),
        ));
    }
    Ok(trimmed)
}

pub fn question_stats(question: &str) -> QuestionStats {
    let word_count = question.split_whitespace().count();
    QuestionStats {
        word_count,
        is_detailed: word_count >= DETAILED_WORD_COUNT,
    }
}
