//! StartWorkflowHandler - Command handler for starting (or restarting) a
//! guided conversation.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::SessionId;
use crate::domain::positioning::Session;
use crate::ports::SessionStore;

use super::WorkflowError;

/// Command to start a workflow session.
#[derive(Debug, Clone)]
pub struct StartWorkflowCommand {
    pub session_id: SessionId,
}

/// Result of starting a workflow.
#[derive(Debug, Clone)]
pub struct StartWorkflowResult {
    pub session: Session,
}

/// Handler for starting workflows.
pub struct StartWorkflowHandler {
    store: Arc<dyn SessionStore>,
}

impl StartWorkflowHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Creates a fresh Step-1 session, discarding any previous state for the
    /// same identifier.
    pub async fn handle(
        &self,
        cmd: StartWorkflowCommand,
    ) -> Result<StartWorkflowResult, WorkflowError> {
        let session = self.store.create(cmd.session_id).await?;
        info!(session_id = %session.id(), "Workflow started");
        Ok(StartWorkflowResult { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::positioning::WorkflowStep;

    fn id() -> SessionId {
        SessionId::new("s-1").unwrap()
    }

    #[tokio::test]
    async fn starts_at_step_one() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartWorkflowHandler::new(store.clone());

        let result = handler
            .handle(StartWorkflowCommand { session_id: id() })
            .await
            .unwrap();

        assert_eq!(result.session.current_step(), WorkflowStep::ContextGathering);
        assert!(result.session.answers().is_empty());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn restart_resets_existing_session() {
        let store = Arc::new(InMemorySessionStore::new());
        {
            let handle = store.get_or_create(&id()).await.unwrap();
            handle.lock().await.record_answer("company_name", "Acme").unwrap();
        }

        StartWorkflowHandler::new(store.clone())
            .handle(StartWorkflowCommand { session_id: id() })
            .await
            .unwrap();

        let session = store.get(&id()).await.unwrap().unwrap();
        assert!(session.answers().is_empty());
    }
}
