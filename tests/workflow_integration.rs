//! Integration tests for the positioning workflow.
//!
//! These tests drive the public API end to end:
//! 1. The conversation pipeline routes on the classifier decision
//! 2. Plan, validation and research degrade predictably on provider failure
//! 3. The HTTP router wires sessions, form answers and chat together

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use pmm_assistant::adapters::ai::{MockAIProvider, MockError};
use pmm_assistant::adapters::http::{workflow_router, WorkflowAppState};
use pmm_assistant::adapters::storage::InMemorySessionStore;
use pmm_assistant::application::{
    ConversationEngine, GenerationClient, PlanSynthesizer, SubmitResponseCommand,
    SubmitResponseHandler, SubmitResponseResult, ValidationService,
};
use pmm_assistant::domain::foundation::SessionId;
use pmm_assistant::domain::positioning::{
    build_context, Answers, WorkflowStep, COMPANY_DESCRIPTION, COMPANY_NAME, COMPANY_SCOPE,
    CUSTOMER_DESCRIPTION, POSITIONING_EXPERIENCE,
};
use pmm_assistant::ports::{GenerationPurpose, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn session_id(raw: &str) -> SessionId {
    SessionId::new(raw).unwrap()
}

fn client(mock: &MockAIProvider) -> GenerationClient {
    GenerationClient::new(Arc::new(mock.clone()))
}

fn step_one_answers() -> Vec<(&'static str, &'static str)> {
    vec![
        (COMPANY_NAME, "Acme Analytics"),
        (COMPANY_DESCRIPTION, "Dashboards for logistics teams"),
        (CUSTOMER_DESCRIPTION, "Operations managers at freight companies"),
        (POSITIONING_EXPERIENCE, "First time"),
        (COMPANY_SCOPE, "Whole company"),
    ]
}

async fn send(app: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// =============================================================================
// Conversation pipeline
// =============================================================================

#[tokio::test]
async fn followup_branch_makes_two_calls_and_skips_reply() {
    let mock = MockAIProvider::new()
        .with_response("NEEDS_FOLLOWUP")
        .with_response("Which segment do you sell to first?");
    let engine = ConversationEngine::with_provider(Arc::new(mock.clone()));

    let reply = engine
        .process_message("we sell stuff", &session_id("s-1"), 2, &Answers::new())
        .await
        .unwrap();

    assert_eq!(reply, "Which segment do you sell to first?");
    assert_eq!(mock.call_count(), 2);
    assert_eq!(mock.calls_for(GenerationPurpose::Classification), 1);
    assert_eq!(mock.calls_for(GenerationPurpose::Followup), 1);
    assert_eq!(mock.calls_for(GenerationPurpose::Reply), 0);
}

#[tokio::test]
async fn complete_branch_replies_with_step_context() {
    let mock = MockAIProvider::new()
        .with_response("COMPLETE")
        .with_response("Let's build your first persona.");
    let engine = ConversationEngine::with_provider(Arc::new(mock.clone()));

    let mut answers = Answers::new();
    answers.insert(COMPANY_NAME.to_string(), "Acme Analytics".to_string());

    let reply = engine
        .process_message("Ready for step 2", &session_id("s-2"), 2, &answers)
        .await
        .unwrap();

    assert_eq!(reply, "Let's build your first persona.");
    assert_eq!(mock.calls_for(GenerationPurpose::Reply), 1);
    assert_eq!(mock.calls_for(GenerationPurpose::Followup), 0);
    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("- company_name: Acme Analytics"));
    assert!(prompt.contains("Ready for step 2"));
}

#[tokio::test]
async fn classifier_outage_surfaces_as_error() {
    let mock = MockAIProvider::failing(MockError::Unavailable {
        message: "outage".to_string(),
    });
    let engine = ConversationEngine::with_provider(Arc::new(mock.clone()));

    let result = engine
        .process_message("hello", &session_id("s-3"), 1, &Answers::new())
        .await;

    assert!(result.is_err());
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn context_is_identical_for_equal_answers() {
    let mut first = Answers::new();
    let mut second = Answers::new();
    for (key, value) in step_one_answers() {
        first.insert(key.to_string(), value.to_string());
    }
    for (key, value) in step_one_answers().into_iter().rev() {
        second.insert(key.to_string(), value.to_string());
    }

    assert_eq!(build_context(3, &first), build_context(3, &second));
    assert!(build_context(3, &first).contains("User Context:"));
}

// =============================================================================
// Degraded generation
// =============================================================================

#[tokio::test]
async fn plan_falls_back_to_template_on_outage() {
    let mock = MockAIProvider::failing(MockError::Network {
        message: "reset".to_string(),
    });
    let synthesizer = PlanSynthesizer::new(client(&mock));

    let plan = synthesizer.generate_plan(&Answers::new(), None).await;

    assert!(plan.contains("Your company"));
    for step in WorkflowStep::ALL {
        assert_eq!(plan.matches(step.title()).count(), 1, "{}", step.title());
    }
}

#[tokio::test]
async fn validation_rejects_unclear_and_failed_verdicts() {
    let unclear = MockAIProvider::new().with_response("Looks fine to me");
    let service = ValidationService::new(client(&unclear));
    assert!(
        !service
            .validate("Acme", "What is your company name?", "text")
            .await
    );

    let failing = MockAIProvider::failing(MockError::AuthenticationFailed);
    let service = ValidationService::new(client(&failing));
    assert!(
        !service
            .validate("Acme", "What is your company name?", "text")
            .await
    );

    let approving = MockAIProvider::new().with_response("VALID");
    let service = ValidationService::new(client(&approving));
    assert!(
        service
            .validate("Acme", "What is your company name?", "text")
            .await
    );
}

// =============================================================================
// Form answers
// =============================================================================

#[tokio::test]
async fn answering_every_step_one_question_advances_once() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let handler = SubmitResponseHandler::new(store.clone());
    let id = session_id("form-1");
    let answers = step_one_answers();
    let last = answers.len() - 1;

    for (index, (question_id, response)) in answers.into_iter().enumerate() {
        let result = handler
            .handle(SubmitResponseCommand {
                session_id: id.clone(),
                step: 1,
                question_id: question_id.to_string(),
                response: response.to_string(),
            })
            .await
            .unwrap();

        if index < last {
            match result {
                SubmitResponseResult::ContinueStep {
                    remaining_count, ..
                } => assert_eq!(remaining_count, last - index),
                other => panic!("expected ContinueStep, got {:?}", other),
            }
        } else {
            assert!(matches!(
                result,
                SubmitResponseResult::StepComplete {
                    next_step: WorkflowStep::CustomerUnderstanding,
                    ..
                }
            ));
        }
    }

    let session = store.get(&id).await.unwrap().unwrap();
    assert_eq!(session.current_step(), WorkflowStep::CustomerUnderstanding);
    assert_eq!(session.completed_steps(), &[WorkflowStep::ContextGathering]);
}

// =============================================================================
// HTTP
// =============================================================================

#[tokio::test]
async fn http_session_flow_records_chat_history() {
    let store = Arc::new(InMemorySessionStore::new());
    let mock = MockAIProvider::new()
        .with_response("COMPLETE")
        .with_response("Great, tell me about your best customer.");
    let state = WorkflowAppState::new(store.clone(), Arc::new(mock.clone()));
    let app = workflow_router(state);

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/start-workflow",
        Some(json!({"session_id": "http-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_step"], 1);

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/chat",
        Some(json!({"session_id": "http-1", "message": "We sell to freight teams"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Great, tell me about your best customer.");

    let session = store.get(&session_id("http-1")).await.unwrap().unwrap();
    assert_eq!(session.history().len(), 2);
    assert!(session.history()[0].is_user());
    assert!(!session.follow_up_needed());

    let (status, body) = send(app, "GET", "/api/workflow-state/http-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_step"], 1);
    assert_eq!(body["is_complete"], false);
}

#[tokio::test]
async fn http_chat_outage_is_a_generic_server_error() {
    let mock = MockAIProvider::failing(MockError::Unavailable {
        message: "upstream secret detail".to_string(),
    });
    let state = WorkflowAppState::new(Arc::new(InMemorySessionStore::new()), Arc::new(mock));
    let app = workflow_router(state);

    let (status, body) = send(
        app,
        "POST",
        "/api/chat",
        Some(json!({"session_id": "http-2", "message": "hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("upstream secret detail"));
}

#[tokio::test]
async fn http_slow_chat_times_out_with_json_error() {
    let store = Arc::new(InMemorySessionStore::new());
    let mock = MockAIProvider::new()
        .with_response("COMPLETE")
        .with_delay(Duration::from_millis(300));
    let state = WorkflowAppState::new(store.clone(), Arc::new(mock))
        .with_generation_timeout(Duration::from_millis(100));

    let (status, body) = send(
        workflow_router(state),
        "POST",
        "/api/chat",
        Some(json!({"session_id": "http-3", "message": "hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["code"], "GENERATION_TIMEOUT");

    let session = store.get(&session_id("http-3")).await.unwrap().unwrap();
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn http_unknown_session_state_is_not_found() {
    let state = WorkflowAppState::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(MockAIProvider::new()),
    );

    let (status, body) = send(workflow_router(state), "GET", "/api/workflow-state/ghost", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}
