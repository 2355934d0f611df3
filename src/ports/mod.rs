//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - The external text-generation service
//! - `SessionStore` - Live session storage with per-session locking

mod ai_provider;
mod session_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, GenerationPurpose, Message,
    MessageRole, RequestMetadata, TokenUsage,
};
pub use session_store::{SessionCell, SessionGuard, SessionHandle, SessionStore};
