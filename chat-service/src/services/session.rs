//! In-memory session store for per-session conversation history.

use crate::models::Turn;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one session's ordered turn sequence.
///
/// Handles returned for the same session id alias the same sequence; callers
/// see each other's appends.
pub type SessionHistory = Arc<Mutex<Vec<Turn>>>;

/// Key-value store of conversation histories.
pub trait SessionStore: Send + Sync {
    /// Look up an existing session without creating it.
    fn get(&self, session_id: &str) -> Option<SessionHistory>;

    /// Return the session's history, creating an empty one if absent.
    fn get_or_create(&self, session_id: &str) -> SessionHistory;
}

/// Process-lifetime map with no eviction, capacity bound, or expiry.
///
/// Histories live until the process exits and grow without bound. Swapping
/// in a bounded or externally persisted store only requires another
/// `SessionStore` implementation; the orchestrator is unaware of the backing.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionHistory>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions created so far.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str) -> Option<SessionHistory> {
        self.sessions
            .get(session_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn get_or_create(&self, session_id: &str) -> SessionHistory {
        Arc::clone(
            self.sessions
                .entry(session_id.to_string())
                .or_insert_with(SessionHistory::default)
                .value(),
        )
    }
}
