//! Axum route handlers for the offline catalog.

use axum::Json;
use serde::Serialize;

use crate::topics::resolver::{available_keywords, display_name};

/// Ready-made questions, each resolving to one catalog topic.
pub const SAMPLE_QUESTIONS: [&str; 5] = [
    "Explain data structures and types",
    "What is OOPS? List its concepts",
    "Define DBMS and advantages",
    "Explain operating system functions",
    "What are algorithms and their types",
];

#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub keyword: &'static str,
    pub name: String,
}

/// GET /api/v1/topics
///
/// Offline topics in resolution order.
pub async fn handle_list_topics() -> Json<Vec<TopicSummary>> {
    Json(
        available_keywords()
            .into_iter()
            .map(|keyword| TopicSummary {
                keyword,
                name: display_name(keyword),
            })
            .collect(),
    )
}

/// GET /api/v1/samples
pub async fn handle_sample_questions() -> Json<Vec<&'static str>> {
    Json(SAMPLE_QUESTIONS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::resolver::resolve;

    #[test]
    fn test_every_sample_resolves_offline() {
        for question in SAMPLE_QUESTIONS {
            assert!(resolve(question).is_ok(), "sample did not resolve: {question}");
        }
    }

    #[test]
    fn test_samples_cover_every_topic() {
        let mut covered: Vec<&str> = SAMPLE_QUESTIONS
            .iter()
            .map(|q| resolve(q).unwrap().keyword)
            .collect();
        covered.sort_unstable();
        let mut all = available_keywords();
        all.sort_unstable();
        assert_eq!(covered, all);
    }
}
