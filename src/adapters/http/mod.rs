//! HTTP adapters - REST API implementations.

pub mod workflow;

pub use workflow::{workflow_router, WorkflowAppState};
