//! Workflow handler error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};
use crate::ports::AIError;

/// Errors returned by the workflow handlers.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Session was not found.
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    /// Input failed validation.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Operation not allowed in the session's current state.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Generation service failed on a path without a fallback.
    #[error("Generation failed: {0}")]
    Generation(#[from] AIError),

    /// Store or other infrastructure failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl WorkflowError {
    pub fn not_found(id: SessionId) -> Self {
        WorkflowError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WorkflowError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorkflowError::NotFound(_) => ErrorCode::SessionNotFound,
            WorkflowError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WorkflowError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            WorkflowError::Generation(_) => ErrorCode::AIProviderError,
            WorkflowError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for WorkflowError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => WorkflowError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::InvalidStateTransition => WorkflowError::InvalidState(err.message),
            _ => WorkflowError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}
