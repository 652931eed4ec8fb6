use serde::Serialize;

/// Where an answer came from. Serialized as `"remote-model"` / `"local-database"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerSource {
    RemoteModel,
    LocalDatabase,
}

impl AnswerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerSource::RemoteModel => "remote-model",
            AnswerSource::LocalDatabase => "local-database",
        }
    }
}

/// Result of one answer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Raw remote model text, passed through unmodified.
    Remote { answer: String },
    /// Formatted catalog answer; `topic` is the matched keyword.
    Local { topic: &'static str, answer: String },
    /// No keyword matched and no remote answer was produced.
    NotFound { message: String },
}

impl AnswerOutcome {
    pub fn source(&self) -> Option<AnswerSource> {
        match self {
            AnswerOutcome::Remote { .. } => Some(AnswerSource::RemoteModel),
            AnswerOutcome::Local { .. } => Some(AnswerSource::LocalDatabase),
            AnswerOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, AnswerOutcome::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(AnswerSource::RemoteModel).unwrap(),
            "remote-model"
        );
        assert_eq!(
            serde_json::to_value(AnswerSource::LocalDatabase).unwrap(),
            AnswerSource::LocalDatabase.as_str()
        );
    }

    #[test]
    fn test_not_found_has_no_source() {
        let outcome = AnswerOutcome::NotFound {
            message: "Topic not found! Available: dbms".to_string(),
        };
        assert!(!outcome.is_found());
        assert!(outcome.source().is_none());
    }
}
