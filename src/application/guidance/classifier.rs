//! Response classifier - decides whether the latest user turn needs a
//! clarifying follow-up.

use tracing::{debug, warn};

use crate::domain::foundation::SessionId;
use crate::domain::positioning::{
    classification_prompt, parse_classification, Classification, Turn,
};
use crate::ports::{AIError, GenerationPurpose};

use super::GenerationClient;

/// Labels the most recent user turn as needing follow-up or complete.
#[derive(Clone)]
pub struct ResponseClassifier {
    client: GenerationClient,
}

impl ResponseClassifier {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Classifies the last turn of `turns` for `step`.
    ///
    /// With no turns, or when the last turn is not from the user, the result
    /// is `Complete` and no generation call is made. Output without a
    /// decision token is treated as `Complete`. Transport errors propagate.
    pub async fn classify(
        &self,
        turns: &[Turn],
        step: i32,
        session_id: Option<&SessionId>,
    ) -> Result<Classification, AIError> {
        let Some(last) = turns.last().filter(|t| t.is_user()) else {
            debug!("No user turn to classify, treating as complete");
            return Ok(Classification::Complete);
        };

        let raw = self
            .client
            .generate_from_prompt(
                classification_prompt(last.content(), step),
                GenerationPurpose::Classification,
                session_id,
            )
            .await?;

        let classification = parse_classification(&raw).unwrap_or_else(|ambiguous| {
            warn!(error = %ambiguous, "Ambiguous classification, defaulting to complete");
            Classification::Complete
        });

        debug!(%classification, step, "Classified user turn");
        Ok(classification)
    }
}
