//! Application layer - Guidance services and command/query handlers.
//!
//! `guidance` composes the generation-facing services; `handlers` wires them
//! to the session store for each external operation.

pub mod guidance;
pub mod handlers;

pub use guidance::{
    ConversationEngine, GenerationClient, PipelineOutcome, PlanSynthesizer, ResearchSynthesizer,
    ValidationService,
};
pub use handlers::{
    ChatCommand, ChatHandler, ConductResearchCommand, ConductResearchHandler, GeneratePlanCommand,
    GeneratePlanHandler, GetWorkflowStateHandler, GetWorkflowStateQuery, StartWorkflowCommand,
    StartWorkflowHandler, StartWorkflowResult, SubmitResponseCommand, SubmitResponseHandler,
    SubmitResponseResult, ValidateResponseCommand, ValidateResponseHandler, WorkflowError,
};
