//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod workflow;

pub use workflow::{
    ChatCommand, ChatHandler, ConductResearchCommand, ConductResearchHandler, GeneratePlanCommand,
    DEFAULT_GENERATION_TIMEOUT,
    GeneratePlanHandler, GetWorkflowStateHandler, GetWorkflowStateQuery, StartWorkflowCommand,
    StartWorkflowHandler, StartWorkflowResult, SubmitResponseCommand, SubmitResponseHandler,
    SubmitResponseResult, ValidateResponseCommand, ValidateResponseHandler, WorkflowError,
};
