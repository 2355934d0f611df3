//! Session store port.
//!
//! Holds the live sessions, keyed by client-supplied identifier.
//!
//! # Concurrency
//!
//! Each session sits behind its own async mutex. A caller that mutates a
//! session locks its handle for the whole read-modify-write, including any
//! generation calls in between, so requests for the same session are
//! serialized while different sessions proceed independently.
//!
//! Readers never take that mutex. Releasing a [`SessionGuard`] publishes the
//! session as its committed copy, and snapshots are served from there.

use async_trait::async_trait;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tokio::sync::{watch, Mutex, MutexGuard};

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::positioning::Session;

/// Shared, lockable reference to one live session.
pub type SessionHandle = Arc<SessionCell>;

/// One live session: the write lock plus the last committed copy.
#[derive(Debug)]
pub struct SessionCell {
    live: Mutex<Session>,
    committed: watch::Sender<Session>,
}

impl SessionCell {
    pub fn new(session: Session) -> Self {
        let (committed, _) = watch::channel(session.clone());
        Self {
            live: Mutex::new(session),
            committed,
        }
    }

    /// Locks the session for a read-modify-write.
    ///
    /// Changes become visible to [`SessionCell::snapshot`] when the guard is
    /// dropped, whether or not the caller finished successfully.
    pub async fn lock(&self) -> SessionGuard<'_> {
        SessionGuard {
            session: self.live.lock().await,
            committed: &self.committed,
        }
    }

    /// The state as of the last released guard. Never waits on a writer.
    pub fn snapshot(&self) -> Session {
        self.committed.borrow().clone()
    }
}

/// Exclusive access to a session; publishes it on drop.
pub struct SessionGuard<'a> {
    session: MutexGuard<'a, Session>,
    committed: &'a watch::Sender<Session>,
}

impl Deref for SessionGuard<'_> {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

impl DerefMut for SessionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.committed.send_replace(self.session.clone());
    }
}

/// Port for session storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates a fresh Step-1 session, replacing any existing one.
    async fn create(&self, id: SessionId) -> Result<Session, DomainError>;

    /// Returns the committed snapshot of a session without waiting for an
    /// in-flight writer.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Returns the lockable handle of an existing session.
    ///
    /// Returns `None` if not found.
    async fn handle(&self, id: &SessionId) -> Result<Option<SessionHandle>, DomainError>;

    /// Returns the handle of a session, creating a fresh one if unknown.
    async fn get_or_create(&self, id: &SessionId) -> Result<SessionHandle, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }

    fn cell() -> SessionCell {
        SessionCell::new(Session::new(SessionId::new("cell").unwrap()))
    }

    #[tokio::test]
    async fn snapshot_lags_until_guard_is_released() {
        let cell = cell();
        let mut guard = cell.lock().await;
        guard.record_answer("company_name", "Acme").unwrap();

        assert!(cell.snapshot().answers().is_empty());

        drop(guard);
        assert_eq!(cell.snapshot().answers()["company_name"], "Acme");
    }

    #[tokio::test]
    async fn snapshot_does_not_wait_for_writer() {
        let cell = cell();
        let _guard = cell.lock().await;

        let snapshot = cell.snapshot();

        assert!(snapshot.history().is_empty());
    }
}
