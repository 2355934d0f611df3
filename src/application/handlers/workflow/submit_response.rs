//! SubmitResponseHandler - Command handler for form answers.
//!
//! Records one answer and, for Step 1, reports either the next unanswered
//! question or the move to Step 2 once the catalogue is complete.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::positioning::{unanswered_questions, Question, WorkflowStep};
use crate::ports::SessionStore;

use super::WorkflowError;

/// Command to submit one answer.
#[derive(Debug, Clone)]
pub struct SubmitResponseCommand {
    pub session_id: SessionId,
    pub step: i32,
    pub question_id: String,
    pub response: String,
}

/// Outcome of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResponseResult {
    /// Step 1 is fully answered; the session moved on.
    StepComplete {
        next_step: WorkflowStep,
        message: String,
    },
    /// Step 1 still has unanswered questions.
    ContinueStep {
        next_question: Option<&'static Question>,
        remaining_count: usize,
    },
    /// Answer recorded for a step without a question catalogue.
    ResponseSaved,
}

/// Handler for submitting answers.
pub struct SubmitResponseHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitResponseHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitResponseCommand,
    ) -> Result<SubmitResponseResult, WorkflowError> {
        let step = WorkflowStep::from_number(cmd.step).ok_or_else(|| {
            ValidationError::out_of_range("step", WorkflowStep::FIRST, WorkflowStep::LAST, cmd.step)
        })?;

        let handle = self.store.get_or_create(&cmd.session_id).await?;
        let mut session = handle.lock().await;

        session.record_answer(cmd.question_id, cmd.response)?;

        if step != WorkflowStep::ContextGathering {
            return Ok(SubmitResponseResult::ResponseSaved);
        }

        if !session.has_answered_all(step) {
            let remaining = unanswered_questions(step, session.answers());
            return Ok(SubmitResponseResult::ContinueStep {
                next_question: remaining.first().copied(),
                remaining_count: remaining.len(),
            });
        }

        if session.current_step() == step {
            session.complete_current_step();
            info!(session_id = %cmd.session_id, "Step 1 completed");
        }

        let next_step = WorkflowStep::CustomerUnderstanding;
        Ok(SubmitResponseResult::StepComplete {
            next_step,
            message: format!("Step 1 completed! Moving to {}", next_step),
        })
    }
}
