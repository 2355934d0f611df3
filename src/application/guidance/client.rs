//! Generation client - the single call boundary to the AI provider.
//!
//! Turns an ordered list of turns into one generated turn. One provider
//! call per invocation, no retry, no timeout and no caching.

use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::foundation::SessionId;
use crate::ports::{AIError, AIProvider, CompletionRequest, GenerationPurpose, Message, RequestMetadata};

/// Thin wrapper over an [`AIProvider`] shared by every generation service.
#[derive(Clone)]
pub struct GenerationClient {
    provider: Arc<dyn AIProvider>,
}

impl GenerationClient {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Generates one turn from an ordered list of turns.
    pub async fn generate(
        &self,
        turns: Vec<Message>,
        purpose: GenerationPurpose,
        session_id: Option<&SessionId>,
    ) -> Result<String, AIError> {
        let mut metadata = RequestMetadata::new(purpose);
        if let Some(id) = session_id {
            metadata = metadata.with_session(id.clone());
        }
        let trace_id = metadata.trace_id;

        let mut request = CompletionRequest::new(metadata);
        for turn in turns {
            request = request.with_message(turn.role, turn.content);
        }

        debug!(
            %purpose,
            %trace_id,
            prompt_chars = request.prompt_len(),
            estimated_tokens = self.estimated_tokens(&request),
            "Sending generation request"
        );

        match self.provider.complete(request).await {
            Ok(response) => {
                debug!(
                    %purpose,
                    %trace_id,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "Generation completed"
                );
                Ok(response.content)
            }
            Err(err) => {
                error!(%purpose, %trace_id, error = %err, "Generation request failed");
                Err(err)
            }
        }
    }

    /// Generates one turn from a single user prompt.
    pub async fn generate_from_prompt(
        &self,
        prompt: String,
        purpose: GenerationPurpose,
        session_id: Option<&SessionId>,
    ) -> Result<String, AIError> {
        self.generate(vec![Message::user(prompt)], purpose, session_id)
            .await
    }

    fn estimated_tokens(&self, request: &CompletionRequest) -> u32 {
        request
            .messages
            .iter()
            .map(|m| self.provider.estimate_tokens(&m.content))
            .sum()
    }
}
