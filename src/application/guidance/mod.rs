//! Guidance services - everything that talks to the generation service.
//!
//! - `GenerationClient` - the one-call boundary to the AI provider
//! - `ConversationEngine` - classifier, follow-up and reply composed into
//!   the per-message pipeline
//! - `ValidationService` - valid/invalid gate for form answers
//! - `PlanSynthesizer`, `ResearchSynthesizer` - single-shot reports

mod classifier;
mod client;
mod engine;
mod followup;
mod reply;
mod synthesis;
mod validation;

pub use classifier::ResponseClassifier;
pub use client::GenerationClient;
pub use engine::{ConversationEngine, PipelineOutcome};
pub use followup::FollowupGenerator;
pub use reply::ReplyGenerator;
pub use synthesis::{PlanSynthesizer, ResearchSynthesizer};
pub use validation::ValidationService;
