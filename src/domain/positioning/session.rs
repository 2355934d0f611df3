//! Session aggregate for one guided conversation.
//!
//! A session is created on first contact for a client-supplied identifier
//! and lives for the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp, ValidationError};

use super::questions::{questions_for_step, Answers};
use super::step::WorkflowStep;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    User,
    Generated,
}

/// One message in the conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: TurnRole,
    content: String,
    created_at: Timestamp,
}

impl Turn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TurnRole::User, content)
    }

    /// Creates a generated turn.
    pub fn generated(content: impl Into<String>) -> Self {
        Self::new(TurnRole::Generated, content)
    }

    fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn role(&self) -> TurnRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Session aggregate.
///
/// # Invariants
///
/// - `current_step` never decreases
/// - `completed_steps` is ordered and holds no duplicates
/// - `history` is append-only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    current_step: WorkflowStep,
    answers: Answers,
    completed_steps: Vec<WorkflowStep>,
    follow_up_needed: bool,
    history: Vec<Turn>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Creates a fresh session at Step 1.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            current_step: WorkflowStep::default(),
            answers: Answers::new(),
            completed_steps: Vec::new(),
            follow_up_needed: false,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn current_step(&self) -> WorkflowStep {
        self.current_step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn completed_steps(&self) -> &[WorkflowStep] {
        &self.completed_steps
    }

    /// Whether the most recent pipeline pass asked for clarification.
    pub fn follow_up_needed(&self) -> bool {
        self.follow_up_needed
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Returns the most recent turn, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.history.last()
    }

    /// True once the final step has been completed.
    pub fn is_complete(&self) -> bool {
        self.completed_steps.contains(&WorkflowStep::MessageTesting)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records (or overwrites) the answer to a question.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the question id or response is blank
    pub fn record_answer(
        &mut self,
        question_id: impl Into<String>,
        response: impl Into<String>,
    ) -> Result<(), DomainError> {
        let question_id = question_id.into();
        let response = response.into();

        if question_id.trim().is_empty() {
            return Err(ValidationError::empty_field("question_id").into());
        }
        if response.trim().is_empty() {
            return Err(ValidationError::empty_field("response").into());
        }

        self.answers.insert(question_id, response);
        self.touch();
        Ok(())
    }

    /// True when every catalogued question of `step` has an answer.
    ///
    /// Steps without a catalogue are never complete by this measure.
    pub fn has_answered_all(&self, step: WorkflowStep) -> bool {
        let questions = questions_for_step(step);
        !questions.is_empty() && questions.iter().all(|q| self.answers.contains_key(q.id))
    }

    /// Moves the session to `step`.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if `step` is before the current step
    pub fn advance_to(&mut self, step: WorkflowStep) -> Result<(), DomainError> {
        if step < self.current_step {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot move from step {} back to step {}",
                    self.current_step.number(),
                    step.number()
                ),
            ));
        }

        self.current_step = step;
        self.touch();
        Ok(())
    }

    /// Marks the current step complete and moves to the next one.
    ///
    /// Returns the new current step, or `None` when the program is finished.
    pub fn complete_current_step(&mut self) -> Option<WorkflowStep> {
        let step = self.current_step;
        if !self.completed_steps.contains(&step) {
            self.completed_steps.push(step);
        }

        let next = step.next();
        if let Some(next) = next {
            self.current_step = next;
        }
        self.touch();
        next
    }

    /// Appends a turn to the history.
    pub fn append_turn(&mut self, turn: Turn) {
        self.history.push(turn);
        self.touch();
    }

    pub fn set_follow_up_needed(&mut self, needed: bool) {
        self.follow_up_needed = needed;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
