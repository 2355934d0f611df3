//! In-Memory Session Store Adapter
//!
//! Keeps live sessions in process memory. Sessions are never evicted and do
//! not survive a restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::positioning::Session;
use crate::ports::{SessionCell, SessionHandle, SessionStore};

/// In-memory session table with one mutex per session.
///
/// `get` reads the committed copy, so it never queues behind a chat that
/// is waiting on generation.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Clear all sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, id: SessionId) -> Result<Session, DomainError> {
        let session = Session::new(id.clone());
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(SessionCell::new(session.clone())));
        Ok(session)
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.read().await.get(id).map(|cell| cell.snapshot()))
    }

    async fn handle(&self, id: &SessionId) -> Result<Option<SessionHandle>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn get_or_create(&self, id: &SessionId) -> Result<SessionHandle, DomainError> {
        if let Some(handle) = self.sessions.read().await.get(id) {
            return Ok(handle.clone());
        }

        let mut sessions = self.sessions.write().await;
        // Another request may have created it between the two locks.
        let handle = sessions.entry(id.clone()).or_insert_with(|| {
            tracing::warn!(session_id = %id, "Session not found, recreating");
            Arc::new(SessionCell::new(Session::new(id.clone())))
        });
        Ok(handle.clone())
    }
}
