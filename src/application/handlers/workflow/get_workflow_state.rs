//! GetWorkflowStateHandler - Query handler for a session's progress.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::positioning::Session;
use crate::ports::SessionStore;

use super::WorkflowError;

/// Query for a session's workflow state.
#[derive(Debug, Clone)]
pub struct GetWorkflowStateQuery {
    pub session_id: SessionId,
}

/// Handler for reading workflow state.
pub struct GetWorkflowStateHandler {
    store: Arc<dyn SessionStore>,
}

impl GetWorkflowStateHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetWorkflowStateQuery) -> Result<Session, WorkflowError> {
        self.store
            .get(&query.session_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found(query.session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;

    #[tokio::test]
    async fn returns_snapshot_of_known_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let id = SessionId::new("known").unwrap();
        store.create(id.clone()).await.unwrap();

        let session = GetWorkflowStateHandler::new(store)
            .handle(GetWorkflowStateQuery { session_id: id.clone() })
            .await
            .unwrap();

        assert_eq!(session.id(), &id);
        assert!(!session.is_complete());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());

        let result = GetWorkflowStateHandler::new(store)
            .handle(GetWorkflowStateQuery {
                session_id: SessionId::new("missing").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(WorkflowError::NotFound(_))));
    }
}
