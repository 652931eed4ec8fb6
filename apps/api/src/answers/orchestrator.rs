//! Answer orchestration: remote model first, offline catalog as fallback.
//!
//! Flow: remote_available? → build prompt → provider.generate (bounded by timeout)
//!       → on any failure or empty text: resolve → format_answer.
//!
//! Remote failures are logged and absorbed here; callers only ever see an
//! `AnswerOutcome`. The interaction log is the caller's concern.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::answers::formatter::format_answer;
use crate::answers::prompts::ANSWER_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{EXAM_EXPERT_ROLE, MEMORABILITY_INSTRUCTION};
use crate::llm_client::{AnswerProvider, LlmError};
use crate::models::answer::AnswerOutcome;
use crate::topics::resolver::resolve;

/// A credential must be longer than this to enable the remote path.
pub const MIN_CREDENTIAL_LEN: usize = 20;

/// Length heuristic only; no format or checksum validation.
pub fn credential_is_valid(credential: Option<&str>) -> bool {
    credential.is_some_and(|c| c.chars().count() > MIN_CREDENTIAL_LEN)
}

/// Per-request answer engine. Whether the remote path is used is fixed at construction.
pub struct AnswerEngine {
    remote: Option<Arc<dyn AnswerProvider>>,
    remote_timeout: Duration,
}

impl AnswerEngine {
    /// Enables `provider` only when `credential` passes [`credential_is_valid`].
    pub fn new(
        credential: Option<&str>,
        provider: Arc<dyn AnswerProvider>,
        remote_timeout: Duration,
    ) -> Self {
        let remote = credential_is_valid(credential).then_some(provider);
        Self {
            remote,
            remote_timeout,
        }
    }

    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Answers `question`. Never fails: the worst case is `AnswerOutcome::NotFound`.
    pub async fn generate_answer(&self, question: &str) -> AnswerOutcome {
        if let Some(provider) = &self.remote {
            match self.generate_remote(provider.as_ref(), question).await {
                Ok(answer) => {
                    info!("Remote model answered ({} chars)", answer.len());
                    return AnswerOutcome::Remote { answer };
                }
                Err(e) => {
                    warn!("Remote generation failed, falling back to offline catalog: {e}");
                }
            }
        }

        answer_from_catalog(question)
    }

    async fn generate_remote(
        &self,
        provider: &dyn AnswerProvider,
        question: &str,
    ) -> Result<String, LlmError> {
        let prompt = build_answer_prompt(question);

        let text = tokio::time::timeout(self.remote_timeout, provider.generate(&prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.remote_timeout))??;

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(text)
    }
}

/// Resolves `question` against the catalog and formats the hit.
pub fn answer_from_catalog(question: &str) -> AnswerOutcome {
    match resolve(question) {
        Ok(topic) => {
            info!("Offline catalog matched topic '{}'", topic.keyword);
            AnswerOutcome::Local {
                topic: topic.keyword,
                answer: format_answer(topic),
            }
        }
        Err(not_found) => AnswerOutcome::NotFound {
            message: not_found.message,
        },
    }
}

/// Fills the answer template. The question goes in last so braces inside it
/// are never treated as placeholders.
pub fn build_answer_prompt(question: &str) -> String {
    ANSWER_PROMPT_TEMPLATE
        .replace("{role}", EXAM_EXPERT_ROLE)
        .replace("{memorability_instruction}", MEMORABILITY_INSTRUCTION)
        .replace("{question}", question)
}
