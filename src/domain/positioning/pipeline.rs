//! The per-message decision pipeline as a finite machine.
//!
//! Each inbound message starts at `Analyze` and moves to exactly one
//! terminal node. The branch is a pure function of the classification.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

use super::decision::Classification;

/// Node of the per-message pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineNode {
    /// Initial node: classify the latest user turn.
    Analyze,
    /// Terminal: ask a clarifying question.
    Followup,
    /// Terminal: produce the forward-moving reply.
    Respond,
}

impl PipelineNode {
    /// Node every invocation starts from.
    pub const INITIAL: PipelineNode = PipelineNode::Analyze;
}

impl StateMachine for PipelineNode {
    fn valid_transitions(&self) -> Vec<Self> {
        use PipelineNode::*;
        match self {
            Analyze => vec![Followup, Respond],
            Followup | Respond => vec![],
        }
    }
}

/// Branch taken out of `Analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Followup,
    Respond,
}

impl Route {
    /// Terminal node this route leads to.
    pub fn node(&self) -> PipelineNode {
        match self {
            Route::Followup => PipelineNode::Followup,
            Route::Respond => PipelineNode::Respond,
        }
    }
}

/// Chooses the branch for a classification.
pub fn route(classification: Classification) -> Route {
    match classification {
        Classification::NeedsFollowup => Route::Followup,
        Classification::Complete => Route::Respond,
    }
}
