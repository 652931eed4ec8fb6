use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::answer::AnswerSource;

/// One answered question in a session.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionRecord {
    pub question: String,
    pub timestamp: DateTime<Utc>,
    pub source: AnswerSource,
}

/// Append-only, in-memory history for one session. Lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InteractionLog {
    records: Vec<InteractionRecord>,
}

impl InteractionLog {
    pub fn record_at(&mut self, question: &str, source: AnswerSource, timestamp: DateTime<Utc>) {
        self.records.push(InteractionRecord {
            question: question.to_string(),
            timestamp,
            source,
        });
    }

    /// Timestamp of the newest record.
    pub fn last_active(&self) -> Option<DateTime<Utc>> {
        self.records.last().map(|r| r.timestamp)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[InteractionRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_in_order() {
        let mut log = InteractionLog::default();
        assert_eq!(log.len(), 0);

        assert!(log.last_active().is_none());

        let first = Utc::now();
        log.record_at("Explain data structures", AnswerSource::LocalDatabase, first);
        log.record_at(
            "What is paging?",
            AnswerSource::RemoteModel,
            first + chrono::Duration::seconds(5),
        );

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].question, "Explain data structures");
        assert_eq!(log.records()[1].source, AnswerSource::RemoteModel);
        assert_eq!(log.last_active(), Some(first + chrono::Duration::seconds(5)));
    }
}
