//! SessionRegistry: one recognizer per live session, keyed by session id.

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

use mca_core::config::RecognizerConfig;
use mca_core::{realtime_span, McaError, McaResult, PatternEstimate};

use crate::recognizer::OnlinePatternRecognizer;
use crate::signals::TurnSignals;

struct SessionEntry {
    recognizer: OnlinePatternRecognizer,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl SessionEntry {
    fn new(config: &RecognizerConfig) -> Self {
        let now = Utc::now();
        Self {
            recognizer: OnlinePatternRecognizer::from_validated(config.clone()),
            created_at: now,
            last_activity: now,
        }
    }

    fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }
}

/// Snapshot of a session's bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub turn_count: u32,
}

/// Thread-safe registry of live sessions.
///
/// Calls on one session serialize on that session's map entry; calls on
/// different sessions proceed in parallel. Cloning shares the same sessions.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<String, SessionEntry>>,
    config: RecognizerConfig,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::from_validated(RecognizerConfig::default())
    }

    /// Every session opened on this registry shares `config`, so it is
    /// validated once here.
    pub fn with_config(config: RecognizerConfig) -> McaResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: RecognizerConfig) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Open a session and return its initial estimate.
    /// Fails if a session with this id is already live.
    pub fn open_session(&self, session_id: impl Into<String>) -> McaResult<PatternEstimate> {
        let session_id = session_id.into();
        match self.sessions.entry(session_id.clone()) {
            Entry::Occupied(_) => Err(McaError::SessionAlreadyOpen { id: session_id }),
            Entry::Vacant(slot) => {
                let entry = slot.insert(SessionEntry::new(&self.config));
                tracing::info!(session_id = %session_id, "session opened");
                Ok(entry.recognizer.current_estimate().clone())
            }
        }
    }

    /// Open a session under a fresh random id and return the id.
    pub fn open_anonymous_session(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.open_session(id.clone()).is_ok() {
                return id;
            }
        }
    }

    /// Fold one turn into the session's recognizer.
    pub fn update(&self, session_id: &str, signals: &TurnSignals) -> McaResult<PatternEstimate> {
        let mut entry = self.entry_mut(session_id)?;
        let span = realtime_span!(session_id, entry.recognizer.turn_count() + 1);
        let _guard = span.enter();
        entry.touch();
        Ok(entry.recognizer.update(signals))
    }

    /// Last computed estimate for the session.
    pub fn current_estimate(&self, session_id: &str) -> McaResult<PatternEstimate> {
        self.sessions
            .get(session_id)
            .map(|e| e.recognizer.current_estimate().clone())
            .ok_or_else(|| not_found(session_id))
    }

    pub fn is_high_risk_f(&self, session_id: &str, signals: &TurnSignals) -> McaResult<bool> {
        self.sessions
            .get(session_id)
            .map(|e| e.recognizer.is_high_risk_f(signals))
            .ok_or_else(|| not_found(session_id))
    }

    /// Return the session's recognizer to its prior.
    pub fn reset(&self, session_id: &str) -> McaResult<()> {
        let mut entry = self.entry_mut(session_id)?;
        entry.recognizer.reset();
        entry.touch();
        tracing::info!(session_id, "session reset");
        Ok(())
    }

    /// Close a session, returning its final estimate.
    pub fn close_session(&self, session_id: &str) -> Option<PatternEstimate> {
        let (_, entry) = self.sessions.remove(session_id)?;
        tracing::info!(
            session_id,
            turns = entry.recognizer.turn_count(),
            "session closed"
        );
        Some(entry.recognizer.current_estimate().clone())
    }

    /// Close every session idle for longer than `max_idle`. Returns how many
    /// were closed.
    pub fn cleanup_idle(&self, max_idle: chrono::Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| entry.idle_duration() <= max_idle);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            tracing::info!(removed, "closed idle sessions");
        }
        removed
    }

    pub fn session_info(&self, session_id: &str) -> Option<SessionInfo> {
        self.sessions.get(session_id).map(|e| SessionInfo {
            session_id: session_id.to_string(),
            created_at: e.created_at,
            last_activity: e.last_activity,
            turn_count: e.recognizer.turn_count(),
        })
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Ids of all live sessions.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    fn entry_mut(
        &self,
        session_id: &str,
    ) -> McaResult<dashmap::mapref::one::RefMut<'_, String, SessionEntry>> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| not_found(session_id))
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(session_id: &str) -> McaError {
    McaError::SessionNotFound {
        id: session_id.to_string(),
    }
}
