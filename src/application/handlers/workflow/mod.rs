//! Workflow command and query handlers.

mod chat;
mod conduct_research;
mod deadline;
mod errors;
mod generate_plan;
mod get_workflow_state;
mod start_workflow;
mod submit_response;
mod validate_response;

pub use chat::{ChatCommand, ChatHandler};
pub use conduct_research::{ConductResearchCommand, ConductResearchHandler};
pub use deadline::DEFAULT_GENERATION_TIMEOUT;
pub use errors::WorkflowError;
pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler};
pub use get_workflow_state::{GetWorkflowStateHandler, GetWorkflowStateQuery};
pub use start_workflow::{StartWorkflowCommand, StartWorkflowHandler, StartWorkflowResult};
pub use submit_response::{SubmitResponseCommand, SubmitResponseHandler, SubmitResponseResult};
pub use validate_response::{ValidateResponseCommand, ValidateResponseHandler};
