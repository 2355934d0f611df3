//! Validation service - single-shot valid/invalid gate for form answers.
//!
//! Wrongly rejecting a good answer is preferred to accepting noise, so every
//! failure mode resolves to `false`.

use tracing::{debug, warn};

use crate::domain::positioning::{parse_verdict, validation_prompt};
use crate::ports::GenerationPurpose;

use super::GenerationClient;

#[derive(Clone)]
pub struct ValidationService {
    client: GenerationClient,
}

impl ValidationService {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Returns true only when the generated verdict is unambiguously VALID.
    pub async fn validate(&self, message: &str, question: &str, question_type: &str) -> bool {
        let raw = match self
            .client
            .generate_from_prompt(
                validation_prompt(message, question, question_type),
                GenerationPurpose::Validation,
                None,
            )
            .await
        {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "Validation call failed, treating answer as invalid");
                return false;
            }
        };

        match parse_verdict(&raw) {
            Ok(verdict) => {
                debug!(?verdict, "Validated answer");
                verdict.is_valid()
            }
            Err(ambiguous) => {
                warn!(error = %ambiguous, "Unclear validation verdict, treating answer as invalid");
                false
            }
        }
    }
}
