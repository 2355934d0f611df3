//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine trait)
//! - `positioning` - The guided program: steps, context, decisions, sessions, prompts

pub mod foundation;
pub mod positioning;
