//! Topic resolution: case-insensitive substring lookup into the offline catalog.

use thiserror::Error;

use crate::topics::catalog::{TopicEntry, TOPICS};

/// No catalog keyword occurs in the question. The message lists every keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TopicNotFound {
    pub message: String,
}

/// Returns the first catalog entry whose keyword occurs in `question`.
///
/// Matching is plain containment on the lowercased question, checked in
/// catalog order. The position of the keyword inside the question is irrelevant.
pub fn resolve(question: &str) -> Result<&'static TopicEntry, TopicNotFound> {
    let question_lower = question.to_lowercase();

    TOPICS
        .iter()
        .find(|topic| question_lower.contains(topic.keyword))
        .ok_or_else(|| TopicNotFound {
            message: format!(
                "Topic not found! Available: {}",
                available_keywords().join(", ")
            ),
        })
}

/// All catalog keywords in resolution order.
pub fn available_keywords() -> Vec<&'static str> {
    TOPICS.iter().map(|t| t.keyword).collect()
}

/// Title-cases a keyword for display: "data structure" → "Data Structure".
pub fn display_name(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
