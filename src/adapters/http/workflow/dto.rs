//! HTTP DTOs for workflow endpoints.
//!
//! Field names are snake_case and match what the browser client sends.
//! Request fields are optional at the serde level so a missing field is
//! reported as a 400 with a readable message instead of a body rejection.

use serde::{Deserialize, Serialize};

use crate::application::handlers::SubmitResponseResult;
use crate::domain::positioning::{Answers, Question, Session, WorkflowStep};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request carrying only a session identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionRequest {
    pub session_id: Option<String>,
}

/// Request to record one form answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponseRequest {
    pub session_id: Option<String>,
    pub step: Option<i32>,
    pub question_id: Option<String>,
    pub response: Option<String>,
}

/// Request to validate one form answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateResponseRequest {
    pub session_id: Option<String>,
    pub message: Option<String>,
    pub question: Option<String>,
    pub question_type: Option<String>,
}

/// Request to generate the program plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratePlanRequest {
    pub session_id: Option<String>,
    #[serde(default)]
    pub responses: Answers,
}

/// Request to send one chat message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: Option<String>,
}

/// Request acknowledging a persona document upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadPersonaDocumentRequest {
    pub session_id: Option<String>,
    pub filename: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StartWorkflowResponse {
    pub status: &'static str,
    pub current_step: i32,
    pub session_id: String,
}

/// Progress snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStateResponse {
    pub current_step: i32,
    pub completed_steps: Vec<i32>,
    pub responses: Answers,
    pub is_complete: bool,
}

impl From<&Session> for WorkflowStateResponse {
    fn from(session: &Session) -> Self {
        Self {
            current_step: session.current_step().number(),
            completed_steps: session.completed_steps().iter().map(WorkflowStep::number).collect(),
            responses: session.answers().clone(),
            is_complete: session.is_complete(),
        }
    }
}

/// Outcome of a submitted answer, tagged by `status`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitResponseResponse {
    StepComplete {
        next_step: i32,
        message: String,
    },
    ContinueStep {
        next_question: Option<&'static Question>,
        remaining_count: usize,
    },
    ResponseSaved,
}

impl From<SubmitResponseResult> for SubmitResponseResponse {
    fn from(result: SubmitResponseResult) -> Self {
        match result {
            SubmitResponseResult::StepComplete { next_step, message } => Self::StepComplete {
                next_step: next_step.number(),
                message,
            },
            SubmitResponseResult::ContinueStep {
                next_question,
                remaining_count,
            } => Self::ContinueStep {
                next_question,
                remaining_count,
            },
            SubmitResponseResult::ResponseSaved => Self::ResponseSaved,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponseResponse {
    pub is_valid: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub plan: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Canonical step titles in program order.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStepsResponse {
    pub steps: Vec<&'static str>,
}

impl WorkflowStepsResponse {
    pub fn all() -> Self {
        Self {
            steps: WorkflowStep::ALL.iter().map(WorkflowStep::title).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepQuestionsResponse {
    pub questions: &'static [Question],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadPersonaDocumentResponse {
    pub message: &'static str,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchTodoResponse {
    pub todo_list: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResearchResponse {
    pub research_results: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
