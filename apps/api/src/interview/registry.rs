//! Session registry: process-wide store of in-progress interviews.
//!
//! Pluggable via the `SessionStore` trait; `AppState` carries an `Arc<dyn SessionStore>`.
//! Each session sits behind its own mutex. Callers hold it for the whole
//! read-modify-write of an answer, so concurrent answers on one session id are
//! serialised while distinct ids never contend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::interview::models::InterviewSession;

/// Shared handle to one session. Lock it to read or update.
pub type SessionHandle = Arc<Mutex<InterviewSession>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `session` under `session_id`, replacing any existing session
    /// (last write wins). Returns `true` if one was replaced.
    async fn create(&self, session_id: &str, session: InterviewSession) -> bool;

    async fn get(&self, session_id: &str) -> Option<SessionHandle>;

    /// Removes `session_id` only while it still maps to `handle`.
    /// Returns `false` if the id is gone or was re-created meanwhile.
    async fn delete(&self, session_id: &str, handle: &SessionHandle) -> bool;

    async fn active_count(&self) -> usize;
}

/// Default store: a map in process memory. Sessions do not survive a restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session_id: &str, session: InterviewSession) -> bool {
        let handle = Arc::new(Mutex::new(session));
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), handle)
            .is_some()
    }

    async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(session_id).cloned()
    }

    async fn delete(&self, session_id: &str, handle: &SessionHandle) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get(session_id) {
            Some(current) if Arc::ptr_eq(current, handle) => {
                sessions.remove(session_id);
                true
            }
            _ => false,
        }
    }

    async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
