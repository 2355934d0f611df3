//! HTTP adapter for workflow endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ErrorResponse;
pub use handlers::{WorkflowApiError, WorkflowAppState};
pub use routes::{workflow_router, workflow_routes};
