//! State machine trait for node and lifecycle enums.
//!
//! Gives every finite machine in the domain the same vocabulary: which
//! targets are reachable from a state, a checked transition, and whether a
//! state is terminal.

use super::ValidationError;

/// Trait for enums that represent finite state machines.
///
/// Implementors list their valid targets; the checked transition and the
/// terminal test come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for PipelineNode {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Analyze => vec![Followup, Respond],
///             Followup | Respond => vec![],
///         }
///     }
/// }
///
/// let next = PipelineNode::Analyze.transition_to(PipelineNode::Respond)?;
/// assert!(next.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
