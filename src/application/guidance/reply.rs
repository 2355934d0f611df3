//! Reply generator - produces the forward-moving reply for a step.

use crate::domain::foundation::SessionId;
use crate::domain::positioning::{build_context, reply_prompt, Answers};
use crate::ports::{AIError, GenerationPurpose};

use super::GenerationClient;

#[derive(Clone)]
pub struct ReplyGenerator {
    client: GenerationClient,
}

impl ReplyGenerator {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Generates the reply grounded in the step context and known answers.
    /// No fallback: errors propagate.
    pub async fn reply(
        &self,
        user_message: &str,
        step: i32,
        answers: &Answers,
        session_id: Option<&SessionId>,
    ) -> Result<String, AIError> {
        let context = build_context(step, answers);
        self.client
            .generate_from_prompt(
                reply_prompt(&context, user_message),
                GenerationPurpose::Reply,
                session_id,
            )
            .await
    }
}
