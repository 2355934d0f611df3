//! ChatHandler - Command handler for free-text conversation turns.
//!
//! Holds the session's lock for the whole turn so concurrent messages for
//! one session are applied in order and no history entry is lost. The
//! pipeline runs under the handler's generation timeout.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::application::guidance::{ConversationEngine, PipelineOutcome};
use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::positioning::Turn;
use crate::ports::SessionStore;

use super::deadline::{within, DEFAULT_GENERATION_TIMEOUT};
use super::WorkflowError;

/// Command to send one chat message.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub session_id: SessionId,
    pub message: String,
}

/// Handler for chat messages.
pub struct ChatHandler {
    store: Arc<dyn SessionStore>,
    engine: ConversationEngine,
    timeout: Duration,
}

impl ChatHandler {
    pub fn new(store: Arc<dyn SessionStore>, engine: ConversationEngine) -> Self {
        Self {
            store,
            engine,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    /// Bounds the whole pipeline (both generation calls) for one message.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Runs the pipeline for one message and records both turns.
    ///
    /// On generation failure or timeout the user turn stays in the history
    /// and the error is returned; no generated turn is appended.
    pub async fn handle(&self, cmd: ChatCommand) -> Result<PipelineOutcome, WorkflowError> {
        if cmd.message.trim().is_empty() {
            return Err(ValidationError::empty_field("message").into());
        }

        let handle = self.store.get_or_create(&cmd.session_id).await?;
        let mut session = handle.lock().await;

        session.append_turn(Turn::user(cmd.message.clone()));
        let step = session.current_step().number();
        let answers = session.answers().clone();

        let pipeline = self.engine.run(&cmd.message, &cmd.session_id, step, &answers);
        let outcome = match within(self.timeout, pipeline).await.and_then(|result| result) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(session_id = %cmd.session_id, error = %err, "Chat pipeline failed");
                return Err(err.into());
            }
        };

        session.set_follow_up_needed(outcome.follow_up_needed());
        session.append_turn(Turn::generated(outcome.reply.clone()));
        debug!(
            session_id = %cmd.session_id,
            history_len = session.history().len(),
            "Recorded chat turns"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::positioning::{TurnRole, WorkflowStep};
    use crate::ports::{AIError, GenerationPurpose};

    fn id() -> SessionId {
        SessionId::new("chat").unwrap()
    }

    fn handler(store: &Arc<InMemorySessionStore>, mock: &MockAIProvider) -> ChatHandler {
        ChatHandler::new(
            store.clone(),
            ConversationEngine::with_provider(Arc::new(mock.clone())),
        )
    }

    fn cmd(message: &str) -> ChatCommand {
        ChatCommand {
            session_id: id(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn records_user_and_generated_turns() {
        let store = Arc::new(InMemorySessionStore::new());
        let mock = MockAIProvider::new()
            .with_response("COMPLETE")
            .with_response("Who buys from you?");

        let outcome = handler(&store, &mock).handle(cmd("We sell rockets")).await.unwrap();

        assert_eq!(outcome.reply, "Who buys from you?");
        let session = store.get(&id()).await.unwrap().unwrap();
        let roles: Vec<_> = session.history().iter().map(Turn::role).collect();
        assert_eq!(roles, vec![TurnRole::User, TurnRole::Generated]);
        assert_eq!(session.history()[0].content(), "We sell rockets");
        assert!(!session.follow_up_needed());
    }

    #[tokio::test]
    async fn followup_sets_flag() {
        let store = Arc::new(InMemorySessionStore::new());
        let mock = MockAIProvider::new()
            .with_response("NEEDS_FOLLOWUP")
            .with_response("Could you say more?");

        handler(&store, &mock).handle(cmd("ok")).await.unwrap();

        let session = store.get(&id()).await.unwrap().unwrap();
        assert!(session.follow_up_needed());
    }

    #[tokio::test]
    async fn uses_session_step_and_answers() {
        let store = Arc::new(InMemorySessionStore::new());
        {
            let handle = store.get_or_create(&id()).await.unwrap();
            let mut session = handle.lock().await;
            session.record_answer("company_name", "Acme").unwrap();
            session.advance_to(WorkflowStep::CompetitivePositioning).unwrap();
        }
        let mock = MockAIProvider::new()
            .with_response("COMPLETE")
            .with_response("reply");

        handler(&store, &mock).handle(cmd("We beat Globex")).await.unwrap();

        let prompt = mock.last_prompt().unwrap();
        assert!(prompt.contains("Step 4: Category & Competitive Positioning"));
        assert!(prompt.contains("- company_name: Acme"));
    }

    #[tokio::test]
    async fn failure_keeps_user_turn_only() {
        let store = Arc::new(InMemorySessionStore::new());
        let mock = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 120 });

        let result = handler(&store, &mock).handle(cmd("hello")).await;

        assert!(matches!(result, Err(WorkflowError::Generation(_))));
        let session = store.get(&id()).await.unwrap().unwrap();
        assert_eq!(session.history().len(), 1);
        assert!(session.history()[0].is_user());
    }

    #[tokio::test]
    async fn slow_pipeline_times_out_and_releases_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let mock = MockAIProvider::new()
            .with_response("COMPLETE")
            .with_delay(Duration::from_millis(300));
        let handler = handler(&store, &mock).with_timeout(Duration::from_millis(50));

        let result = handler.handle(cmd("hello")).await;

        assert!(matches!(
            result,
            Err(WorkflowError::Generation(AIError::Timeout { timeout_secs: 1 }))
        ));
        let session = store.get(&id()).await.unwrap().unwrap();
        assert_eq!(session.history().len(), 1);
        assert!(session.history()[0].is_user());
    }

    #[tokio::test]
    async fn state_reads_do_not_wait_for_in_flight_chat() {
        let store = Arc::new(InMemorySessionStore::new());
        store.create(id()).await.unwrap();
        let mock = MockAIProvider::new()
            .with_response("COMPLETE")
            .with_response("reply")
            .with_delay(Duration::from_millis(200));
        let handler = Arc::new(handler(&store, &mock));

        let chat = {
            let handler = handler.clone();
            tokio::spawn(async move { handler.handle(cmd("hello")).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;

        let during = tokio::time::timeout(Duration::from_millis(100), store.get(&id()))
            .await
            .expect("read waited on the chat")
            .unwrap()
            .unwrap();
        assert!(during.history().is_empty());

        chat.await.unwrap().unwrap();
        let after = store.get(&id()).await.unwrap().unwrap();
        assert_eq!(after.history().len(), 2);
    }

    #[tokio::test]
    async fn blank_message_is_rejected_without_calls() {
        let store = Arc::new(InMemorySessionStore::new());
        let mock = MockAIProvider::new();

        let result = handler(&store, &mock).handle(cmd("   ")).await;

        assert!(matches!(result, Err(WorkflowError::ValidationFailed { .. })));
        assert_eq!(mock.call_count(), 0);
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn concurrent_messages_keep_every_turn() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut mock = MockAIProvider::new();
        for _ in 0..5 {
            mock = mock.with_response("COMPLETE").with_response("reply");
        }
        let handler = Arc::new(handler(&store, &mock));

        let tasks: Vec<_> = (0..5)
            .map(|i| {
                let handler = handler.clone();
                tokio::spawn(async move { handler.handle(cmd(&format!("message {}", i))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let session = store.get(&id()).await.unwrap().unwrap();
        assert_eq!(session.history().len(), 10);
        assert_eq!(mock.calls_for(GenerationPurpose::Classification), 5);
        for pair in session.history().chunks(2) {
            assert!(pair[0].is_user());
            assert!(!pair[1].is_user());
        }
    }
}
