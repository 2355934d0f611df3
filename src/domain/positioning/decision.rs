//! Decision-token parsing for generated text.
//!
//! The generation service is asked to answer with literal tokens. These are
//! the only two places that read those tokens back, so the decision policy
//! can be tested without a network call.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Token the classifier looks for to request clarification.
pub const NEEDS_FOLLOWUP_TOKEN: &str = "NEEDS_FOLLOWUP";
/// Token asked of the classifier when the answer is sufficient.
pub const COMPLETE_TOKEN: &str = "COMPLETE";
/// Token the validator looks for to accept an answer.
pub const VALID_TOKEN: &str = "VALID";
/// Token the validator looks for to reject an answer.
pub const INVALID_TOKEN: &str = "INVALID";

/// Outcome of classifying the latest user turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// The answer is unclear or too brief.
    NeedsFollowup,
    /// The answer is clear enough to move on.
    Complete,
}

impl Classification {
    pub fn needs_followup(&self) -> bool {
        matches!(self, Self::NeedsFollowup)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeedsFollowup => write!(f, "{}", NEEDS_FOLLOWUP_TOKEN),
            Self::Complete => write!(f, "{}", COMPLETE_TOKEN),
        }
    }
}

/// Outcome of validating a form answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Generated text did not contain the decision token that was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected one of {expected} in generated output, got {raw:?}")]
pub struct AmbiguousOutput {
    /// Tokens that would have been accepted.
    pub expected: &'static str,
    /// The raw generated text.
    pub raw: String,
}

/// Reads a classification from generated text.
///
/// The follow-up token is matched as a case-sensitive, unanchored substring:
/// output that merely mentions it still counts as a follow-up request. If it
/// is absent, an explicit `COMPLETE` yields `Complete`; anything else is
/// ambiguous.
pub fn parse_classification(raw: &str) -> Result<Classification, AmbiguousOutput> {
    if raw.contains(NEEDS_FOLLOWUP_TOKEN) {
        Ok(Classification::NeedsFollowup)
    } else if raw.contains(COMPLETE_TOKEN) {
        Ok(Classification::Complete)
    } else {
        Err(AmbiguousOutput {
            expected: "NEEDS_FOLLOWUP|COMPLETE",
            raw: raw.to_string(),
        })
    }
}

/// Reads a validation verdict from generated text.
///
/// Matching runs on the trimmed, upper-cased text. `INVALID` anywhere wins.
/// Because `INVALID` contains `VALID`, a bare `VALID` only counts when
/// `INVALID` is absent. Output with neither token is ambiguous.
pub fn parse_verdict(raw: &str) -> Result<Verdict, AmbiguousOutput> {
    let text = raw.trim().to_uppercase();

    if text.contains(INVALID_TOKEN) {
        Ok(Verdict::Invalid)
    } else if text.contains(VALID_TOKEN) {
        Ok(Verdict::Valid)
    } else {
        Err(AmbiguousOutput {
            expected: "VALID|INVALID",
            raw: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod classification {
        use super::*;

        #[test]
        fn bare_tokens_parse() {
            assert_eq!(
                parse_classification("NEEDS_FOLLOWUP"),
                Ok(Classification::NeedsFollowup)
            );
            assert_eq!(parse_classification("COMPLETE"), Ok(Classification::Complete));
        }

        #[test]
        fn followup_token_is_unanchored() {
            let raw = "The answer is fine, I would not say NEEDS_FOLLOWUP here. COMPLETE";
            assert_eq!(parse_classification(raw), Ok(Classification::NeedsFollowup));
        }

        #[test]
        fn followup_token_is_case_sensitive() {
            assert_eq!(
                parse_classification("needs_followup").unwrap_err().raw,
                "needs_followup"
            );
        }

        #[test]
        fn missing_tokens_are_ambiguous() {
            let err = parse_classification("Looks good to me.").unwrap_err();
            assert_eq!(err.expected, "NEEDS_FOLLOWUP|COMPLETE");
            assert_eq!(err.raw, "Looks good to me.");
        }

        #[test]
        fn displays_as_token() {
            assert_eq!(Classification::NeedsFollowup.to_string(), "NEEDS_FOLLOWUP");
            assert_eq!(Classification::Complete.to_string(), "COMPLETE");
        }
    }

    mod verdict {
        use super::*;

        #[test]
        fn valid_alone_is_valid() {
            assert_eq!(parse_verdict("VALID"), Ok(Verdict::Valid));
            assert_eq!(parse_verdict("  valid\n"), Ok(Verdict::Valid));
        }

        #[test]
        fn invalid_wins_even_with_valid() {
            assert_eq!(parse_verdict("INVALID"), Ok(Verdict::Invalid));
            assert_eq!(parse_verdict("VALID? No, INVALID."), Ok(Verdict::Invalid));
            assert_eq!(parse_verdict("invalid"), Ok(Verdict::Invalid));
        }

        #[test]
        fn neither_token_is_ambiguous() {
            let err = parse_verdict("Sure, that works").unwrap_err();
            assert_eq!(err.expected, "VALID|INVALID");
        }

        #[test]
        fn empty_output_is_ambiguous() {
            assert!(parse_verdict("").is_err());
        }
    }
}
