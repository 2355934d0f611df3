//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text-generation providers (OpenAI, mock)
//! - `http` - The workflow REST API
//! - `storage` - In-memory session store

pub mod ai;
pub mod http;
pub mod storage;
