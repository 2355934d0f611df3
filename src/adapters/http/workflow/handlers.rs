//! HTTP handlers for workflow endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info};

use crate::application::guidance::{
    ConversationEngine, GenerationClient, PlanSynthesizer, ResearchSynthesizer, ValidationService,
};
use crate::application::handlers::{
    ChatCommand, ChatHandler, ConductResearchCommand, ConductResearchHandler, GeneratePlanCommand,
    GeneratePlanHandler, GetWorkflowStateHandler, GetWorkflowStateQuery, StartWorkflowCommand,
    StartWorkflowHandler, SubmitResponseCommand, SubmitResponseHandler, ValidateResponseCommand,
    ValidateResponseHandler, WorkflowError, DEFAULT_GENERATION_TIMEOUT,
};
use crate::domain::foundation::SessionId;
use crate::domain::positioning::{questions_for_step, WorkflowStep, RESEARCH_TODO};
use crate::ports::{AIError, AIProvider, SessionStore};

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, GeneratePlanRequest, HealthResponse, PlanResponse,
    ResearchResponse, ResearchTodoResponse, SessionRequest, StartWorkflowResponse,
    StepQuestionsResponse, SubmitResponseRequest, SubmitResponseResponse,
    UploadPersonaDocumentRequest, UploadPersonaDocumentResponse, ValidateResponseRequest,
    ValidateResponseResponse, WorkflowStateResponse, WorkflowStepsResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned per request; handlers are built on demand from the shared parts.
#[derive(Clone)]
pub struct WorkflowAppState {
    pub store: Arc<dyn SessionStore>,
    pub provider: Arc<dyn AIProvider>,
    /// Budget for the generation work of one request.
    pub generation_timeout: Duration,
}

impl WorkflowAppState {
    pub fn new(store: Arc<dyn SessionStore>, provider: Arc<dyn AIProvider>) -> Self {
        Self {
            store,
            provider,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    fn client(&self) -> GenerationClient {
        GenerationClient::new(self.provider.clone())
    }

    pub fn start_workflow_handler(&self) -> StartWorkflowHandler {
        StartWorkflowHandler::new(self.store.clone())
    }

    pub fn workflow_state_handler(&self) -> GetWorkflowStateHandler {
        GetWorkflowStateHandler::new(self.store.clone())
    }

    pub fn submit_response_handler(&self) -> SubmitResponseHandler {
        SubmitResponseHandler::new(self.store.clone())
    }

    pub fn validate_response_handler(&self) -> ValidateResponseHandler {
        ValidateResponseHandler::new(ValidationService::new(self.client()))
            .with_timeout(self.generation_timeout)
    }

    pub fn generate_plan_handler(&self) -> GeneratePlanHandler {
        GeneratePlanHandler::new(PlanSynthesizer::new(self.client()))
            .with_timeout(self.generation_timeout)
    }

    pub fn chat_handler(&self) -> ChatHandler {
        ChatHandler::new(
            self.store.clone(),
            ConversationEngine::with_provider(self.provider.clone()),
        )
        .with_timeout(self.generation_timeout)
    }

    pub fn research_handler(&self) -> ConductResearchHandler {
        ConductResearchHandler::new(
            self.store.clone(),
            ResearchSynthesizer::new(self.client()),
        )
        .with_timeout(self.generation_timeout)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request field helpers
// ════════════════════════════════════════════════════════════════════════════════

/// Returns the field's value, treating absent and blank alike.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

fn session_id(raw: String) -> Result<SessionId, WorkflowApiError> {
    SessionId::new(raw).map_err(|_| WorkflowApiError::bad_request("Invalid session ID"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/start-workflow - Start (or restart) a session at Step 1
pub async fn start_workflow(
    State(state): State<WorkflowAppState>,
    Json(req): Json<SessionRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let raw = present(req.session_id)
        .ok_or_else(|| WorkflowApiError::bad_request("session_id is required"))?;
    let cmd = StartWorkflowCommand {
        session_id: session_id(raw)?,
    };

    let result = state.start_workflow_handler().handle(cmd).await?;

    Ok(Json(StartWorkflowResponse {
        status: "started",
        current_step: result.session.current_step().number(),
        session_id: result.session.id().to_string(),
    }))
}

/// POST /api/submit-response - Record one form answer
pub async fn submit_response(
    State(state): State<WorkflowAppState>,
    Json(req): Json<SubmitResponseRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let (Some(raw_id), Some(step), Some(question_id), Some(response)) = (
        present(req.session_id),
        req.step,
        present(req.question_id),
        present(req.response),
    ) else {
        return Err(WorkflowApiError::bad_request("Missing required fields"));
    };

    let cmd = SubmitResponseCommand {
        session_id: session_id(raw_id)?,
        step,
        question_id,
        response,
    };

    let result = state.submit_response_handler().handle(cmd).await?;
    Ok(Json(SubmitResponseResponse::from(result)))
}

/// POST /api/validate-response - Gate a form answer
pub async fn validate_response(
    State(state): State<WorkflowAppState>,
    Json(req): Json<ValidateResponseRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let (Some(raw_id), Some(message), Some(question)) = (
        present(req.session_id),
        present(req.message),
        present(req.question),
    ) else {
        return Err(WorkflowApiError::bad_request("Missing required fields"));
    };

    let cmd = ValidateResponseCommand {
        session_id: session_id(raw_id)?,
        message,
        question,
        question_type: req.question_type.unwrap_or_default(),
    };

    let is_valid = state.validate_response_handler().handle(cmd).await;
    Ok(Json(ValidateResponseResponse { is_valid }))
}

/// POST /api/generate-plan - Personalized program plan from Step-1 answers
pub async fn generate_plan(
    State(state): State<WorkflowAppState>,
    Json(req): Json<GeneratePlanRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let raw = present(req.session_id)
        .ok_or_else(|| WorkflowApiError::bad_request("session_id is required"))?;
    let cmd = GeneratePlanCommand {
        session_id: session_id(raw)?,
        responses: req.responses,
    };

    let plan = state.generate_plan_handler().handle(cmd).await;
    Ok(Json(PlanResponse { plan }))
}

/// POST /api/chat - Run the conversation pipeline for one message
pub async fn chat(
    State(state): State<WorkflowAppState>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let (Some(raw_id), Some(message)) = (present(req.session_id), present(req.message)) else {
        return Err(WorkflowApiError::bad_request(
            "session_id and message are required",
        ));
    };

    let cmd = ChatCommand {
        session_id: session_id(raw_id)?,
        message,
    };

    let outcome = state.chat_handler().handle(cmd).await?;
    Ok(Json(ChatResponse {
        response: outcome.reply,
    }))
}

/// POST /api/upload-persona-document - Acknowledge a persona document
pub async fn upload_persona_document(
    Json(req): Json<UploadPersonaDocumentRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let (Some(raw_id), Some(filename)) = (present(req.session_id), present(req.filename)) else {
        return Err(WorkflowApiError::bad_request(
            "Session ID and filename are required",
        ));
    };

    info!(session_id = %raw_id, %filename, "Persona document uploaded");
    Ok(Json(UploadPersonaDocumentResponse {
        message: "Document uploaded successfully",
        filename,
    }))
}

/// POST /api/get-customer-research-todo - Static Step-2 research action plan
pub async fn customer_research_todo() -> impl IntoResponse {
    Json(ResearchTodoResponse {
        todo_list: RESEARCH_TODO,
    })
}

/// POST /api/conduct-competitor-research - Market research for a session
pub async fn conduct_competitor_research(
    State(state): State<WorkflowAppState>,
    Json(req): Json<SessionRequest>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let raw = present(req.session_id)
        .ok_or_else(|| WorkflowApiError::bad_request("Session ID is required"))?;
    let cmd = ConductResearchCommand {
        session_id: session_id(raw)?,
    };

    let research_results = state.research_handler().handle(cmd).await?;
    Ok(Json(ResearchResponse { research_results }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/workflow-state/:session_id - Session progress
pub async fn get_workflow_state(
    State(state): State<WorkflowAppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, WorkflowApiError> {
    let query = GetWorkflowStateQuery {
        session_id: session_id(raw_id)?,
    };

    let session = state.workflow_state_handler().handle(query).await?;
    Ok(Json(WorkflowStateResponse::from(&session)))
}

/// GET /api/workflow-steps - The eleven step titles
pub async fn get_workflow_steps() -> impl IntoResponse {
    Json(WorkflowStepsResponse::all())
}

/// GET /api/step-questions/:step_number - Question catalogue for a step
pub async fn get_step_questions(Path(step_number): Path<i32>) -> impl IntoResponse {
    let questions = WorkflowStep::from_number(step_number)
        .map(questions_for_step)
        .unwrap_or(&[]);

    let message = questions
        .is_empty()
        .then(|| format!("Step {} questions not yet implemented", step_number));

    Json(StepQuestionsResponse { questions, message })
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts workflow errors to HTTP responses.
#[derive(Debug)]
pub enum WorkflowApiError {
    /// Malformed or incomplete request.
    BadRequest(String),
    /// Failure reported by an application handler.
    Workflow(WorkflowError),
}

impl WorkflowApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        WorkflowApiError::BadRequest(message.into())
    }
}

impl From<WorkflowError> for WorkflowApiError {
    fn from(err: WorkflowError) -> Self {
        WorkflowApiError::Workflow(err)
    }
}

impl IntoResponse for WorkflowApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            WorkflowApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            WorkflowApiError::Workflow(err) => match err {
                WorkflowError::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("SESSION_NOT_FOUND", "Session not found"),
                ),
                WorkflowError::ValidationFailed { .. } => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("VALIDATION_FAILED", err.to_string()),
                ),
                WorkflowError::InvalidState(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("INVALID_STATE_TRANSITION", err.to_string()),
                ),
                WorkflowError::Generation(AIError::Timeout { .. }) => {
                    error!(error = %err, "Generation timed out");
                    (
                        StatusCode::GATEWAY_TIMEOUT,
                        ErrorResponse::new(
                            "GENERATION_TIMEOUT",
                            "The assistant took too long to respond",
                        ),
                    )
                }
                WorkflowError::Generation(_) => {
                    error!(error = %err, "Generation failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new(
                            "WORKFLOW_ERROR",
                            "The assistant could not process your message",
                        ),
                    )
                }
                WorkflowError::Infrastructure(_) => {
                    error!(error = %err, "Workflow infrastructure failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
                    )
                }
            },
        };

        (status, Json(body)).into_response()
    }
}
