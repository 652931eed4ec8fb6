use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::answer::AnswerSource;
use crate::models::interaction::{InteractionLog, InteractionRecord};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini client carrying the server-default key (possibly empty).
    pub llm: LlmClient,
    pub config: Config,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(llm: LlmClient, config: Config) -> Self {
        let sessions = SessionStore::new(
            config.session_capacity,
            Duration::seconds(config.session_idle_ttl_secs),
        );
        Self {
            llm,
            config,
            sessions,
        }
    }
}

/// Per-session interaction history, owned by the HTTP layer rather than the orchestrator.
///
/// Sessions exist only once something was recorded. Creating a session first
/// drops sessions idle longer than `idle_ttl`, then the least recently active
/// ones until there is room under `capacity`.
#[derive(Clone)]
pub struct SessionStore {
    logs: Arc<RwLock<HashMap<Uuid, InteractionLog>>>,
    capacity: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, idle_ttl: Duration) -> Self {
        Self {
            logs: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            idle_ttl,
        }
    }

    /// Appends to the session's log and returns its new length.
    pub async fn record(&self, session_id: Uuid, question: &str, source: AnswerSource) -> usize {
        self.record_at(session_id, question, source, Utc::now()).await
    }

    async fn record_at(
        &self,
        session_id: Uuid,
        question: &str,
        source: AnswerSource,
        now: DateTime<Utc>,
    ) -> usize {
        let mut logs = self.logs.write().await;

        if !logs.contains_key(&session_id) {
            self.evict(&mut logs, now);
        }

        let log = logs.entry(session_id).or_default();
        log.record_at(question, source, now);
        log.len()
    }

    fn evict(&self, logs: &mut HashMap<Uuid, InteractionLog>, now: DateTime<Utc>) {
        let before = logs.len();
        let cutoff = now - self.idle_ttl;
        logs.retain(|_, log| log.last_active().is_some_and(|t| t >= cutoff));

        while logs.len() >= self.capacity {
            let oldest = logs
                .iter()
                .min_by_key(|(_, log)| log.last_active())
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    logs.remove(&id);
                }
                None => break,
            }
        }

        if logs.len() < before {
            debug!("Evicted {} sessions", before - logs.len());
        }
    }

    /// Number of recorded questions; unknown sessions count as zero.
    pub async fn count(&self, session_id: Uuid) -> usize {
        self.logs
            .read()
            .await
            .get(&session_id)
            .map_or(0, InteractionLog::len)
    }

    pub async fn records(&self, session_id: Uuid) -> Vec<InteractionRecord> {
        self.logs
            .read()
            .await
            .get(&session_id)
            .map(|log| log.records().to_vec())
            .unwrap_or_default()
    }

    pub async fn len(&self) -> usize {
        self.logs.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, hour, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_session_counts_zero_without_insert() {
        let store = SessionStore::new(8, Duration::hours(1));
        assert_eq!(store.count(Uuid::new_v4()).await, 0);
        assert!(store.records(Uuid::new_v4()).await.is_empty());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_active() {
        let store = SessionStore::new(2, Duration::hours(24));
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        store.record_at(a, "q1", AnswerSource::LocalDatabase, at(1)).await;
        store.record_at(b, "q2", AnswerSource::LocalDatabase, at(2)).await;
        // a becomes the most recent
        assert_eq!(store.record_at(a, "q3", AnswerSource::RemoteModel, at(3)).await, 2);

        store.record_at(c, "q4", AnswerSource::LocalDatabase, at(4)).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.count(a).await, 2);
        assert_eq!(store.count(b).await, 0);
        assert_eq!(store.count(c).await, 1);
    }

    #[tokio::test]
    async fn test_idle_sessions_expire_when_a_new_one_starts() {
        let store = SessionStore::new(100, Duration::hours(2));
        let (old, fresh, new) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        store.record_at(old, "q1", AnswerSource::LocalDatabase, at(1)).await;
        store.record_at(fresh, "q2", AnswerSource::LocalDatabase, at(8)).await;
        store.record_at(new, "q3", AnswerSource::LocalDatabase, at(9)).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.count(old).await, 0);
        assert_eq!(store.count(fresh).await, 1);
    }
}
