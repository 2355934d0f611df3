//! Axum router configuration for workflow endpoints.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use super::handlers::{
    chat, conduct_competitor_research, customer_research_todo, generate_plan, get_step_questions,
    get_workflow_state, get_workflow_steps, health, start_workflow, submit_response,
    upload_persona_document, validate_response, WorkflowAppState,
};

/// Create the workflow API router.
///
/// # Routes
///
/// ## Session lifecycle
/// - `POST /start-workflow` - Start or restart a session
/// - `GET /workflow-state/:session_id` - Session progress
/// - `POST /submit-response` - Record a form answer
///
/// ## Generation
/// - `POST /validate-response` - Valid/invalid gate for an answer
/// - `POST /generate-plan` - Personalized program plan
/// - `POST /chat` - Conversation pipeline
/// - `POST /conduct-competitor-research` - Market research report
///
/// ## Catalogue
/// - `GET /workflow-steps`
/// - `GET /step-questions/:step_number`
/// - `POST /upload-persona-document`
/// - `POST /get-customer-research-todo`
pub fn workflow_routes() -> Router<WorkflowAppState> {
    Router::new()
        .route("/start-workflow", post(start_workflow))
        .route("/workflow-state/:session_id", get(get_workflow_state))
        .route("/submit-response", post(submit_response))
        .route("/validate-response", post(validate_response))
        .route("/generate-plan", post(generate_plan))
        .route("/chat", post(chat))
        .route("/workflow-steps", get(get_workflow_steps))
        .route("/step-questions/:step_number", get(get_step_questions))
        .route("/upload-persona-document", post(upload_persona_document))
        .route("/get-customer-research-todo", post(customer_research_todo))
        .route(
            "/conduct-competitor-research",
            post(conduct_competitor_research),
        )
}

/// Headroom past the generation budget before the router gives up on a
/// request with a bare 408.
const REQUEST_GRACE: Duration = Duration::from_secs(5);

/// Create the complete application router: the API under `/api` plus
/// `/health`.
///
/// Generation endpoints answer within `state.generation_timeout` with their
/// own JSON result; the outer timeout only catches requests stuck elsewhere.
pub fn workflow_router(state: WorkflowAppState) -> Router {
    let request_timeout = state.generation_timeout + REQUEST_GRACE;

    Router::new()
        .nest("/api", workflow_routes())
        .route("/health", get(health))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
