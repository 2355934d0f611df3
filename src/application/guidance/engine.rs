//! Conversation engine - runs the per-message decision pipeline.
//!
//! `Analyze` classifies the message, then exactly one terminal node runs:
//! `Followup` asks for clarification, `Respond` moves the step forward.
//! The engine reads the session snapshot it is given and never writes
//! session state; persisting turns and answers is the caller's job.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::positioning::{
    route, Answers, Classification, PipelineNode, Route, Turn, FALLBACK_REPLY,
};
use crate::ports::{AIError, AIProvider};

use super::{FollowupGenerator, GenerationClient, ReplyGenerator, ResponseClassifier};

/// Result of one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub classification: Classification,
    pub route: Route,
    /// Terminal node that produced `reply`.
    pub node: PipelineNode,
    pub reply: String,
}

impl PipelineOutcome {
    /// True when the pass ended by asking a clarifying question.
    pub fn follow_up_needed(&self) -> bool {
        self.route == Route::Followup
    }
}

/// Composes the classifier and both generators into the pipeline.
#[derive(Clone)]
pub struct ConversationEngine {
    classifier: ResponseClassifier,
    followup: FollowupGenerator,
    reply: ReplyGenerator,
}

impl ConversationEngine {
    pub fn new(
        classifier: ResponseClassifier,
        followup: FollowupGenerator,
        reply: ReplyGenerator,
    ) -> Self {
        Self {
            classifier,
            followup,
            reply,
        }
    }

    /// Builds every stage on top of one provider.
    pub fn with_provider(provider: Arc<dyn AIProvider>) -> Self {
        let client = GenerationClient::new(provider);
        Self::new(
            ResponseClassifier::new(client.clone()),
            FollowupGenerator::new(client.clone()),
            ReplyGenerator::new(client),
        )
    }

    /// Processes one user message and returns the generated reply text.
    pub async fn process_message(
        &self,
        message: &str,
        session_id: &SessionId,
        current_step: i32,
        previous_responses: &Answers,
    ) -> Result<String, AIError> {
        self.run(message, session_id, current_step, previous_responses)
            .await
            .map(|outcome| outcome.reply)
    }

    /// Processes one user message, reporting which branch ran.
    ///
    /// At most two generation calls are made, strictly in sequence.
    pub async fn run(
        &self,
        message: &str,
        session_id: &SessionId,
        current_step: i32,
        previous_responses: &Answers,
    ) -> Result<PipelineOutcome, AIError> {
        let turns = [Turn::user(message)];
        let node = PipelineNode::INITIAL;

        let classification = self
            .classifier
            .classify(&turns, current_step, Some(session_id))
            .await?;

        let route = route(classification);
        let terminal = route.node();
        debug_assert!(node.can_transition_to(&terminal));
        debug!(%session_id, from = ?node, to = ?terminal, "Pipeline transition");

        let generated = match route {
            Route::Followup => self.followup.followup(message, Some(session_id)).await?,
            Route::Respond => {
                self.reply
                    .reply(message, current_step, previous_responses, Some(session_id))
                    .await?
            }
        };

        let reply = if generated.trim().is_empty() {
            warn!(%session_id, node = ?terminal, "No generated turn, using fallback reply");
            FALLBACK_REPLY.to_string()
        } else {
            generated
        };

        info!(%session_id, step = current_step, route = ?route, "Processed message");

        Ok(PipelineOutcome {
            classification,
            route,
            node: terminal,
            reply,
        })
    }
}
