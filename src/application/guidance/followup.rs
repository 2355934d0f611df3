//! Follow-up generator - asks a clarifying question about the user's words.

use crate::domain::foundation::SessionId;
use crate::domain::positioning::followup_prompt;
use crate::ports::{AIError, GenerationPurpose};

use super::GenerationClient;

#[derive(Clone)]
pub struct FollowupGenerator {
    client: GenerationClient,
}

impl FollowupGenerator {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Generates 1-2 clarifying questions. No fallback: errors propagate.
    pub async fn followup(
        &self,
        user_message: &str,
        session_id: Option<&SessionId>,
    ) -> Result<String, AIError> {
        self.client
            .generate_from_prompt(
                followup_prompt(user_message),
                GenerationPurpose::Followup,
                session_id,
            )
            .await
    }
}
