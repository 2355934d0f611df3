//! ValidateResponseHandler - gates a form answer before it is submitted.

use std::time::Duration;
use tracing::{debug, warn};

use crate::application::guidance::ValidationService;
use crate::domain::foundation::SessionId;

use super::deadline::{within, DEFAULT_GENERATION_TIMEOUT};

/// Command to validate one answer.
#[derive(Debug, Clone)]
pub struct ValidateResponseCommand {
    pub session_id: SessionId,
    pub message: String,
    pub question: String,
    /// Form control type (`text`, `textarea`, `select`); empty when unknown.
    pub question_type: String,
}

/// Handler for answer validation. Never fails; a timeout rejects.
pub struct ValidateResponseHandler {
    service: ValidationService,
    timeout: Duration,
}

impl ValidateResponseHandler {
    pub fn new(service: ValidationService) -> Self {
        Self {
            service,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn handle(&self, cmd: ValidateResponseCommand) -> bool {
        let verdict = self
            .service
            .validate(&cmd.message, &cmd.question, &cmd.question_type);
        let is_valid = within(self.timeout, verdict).await.unwrap_or_else(|err| {
            warn!(session_id = %cmd.session_id, error = %err, "Validation timed out, rejecting");
            false
        });
        debug!(session_id = %cmd.session_id, is_valid, "Validated response");
        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::application::guidance::GenerationClient;
    use std::sync::Arc;

    fn handler(mock: MockAIProvider) -> ValidateResponseHandler {
        ValidateResponseHandler::new(ValidationService::new(GenerationClient::new(Arc::new(mock))))
    }

    fn cmd(message: &str) -> ValidateResponseCommand {
        ValidateResponseCommand {
            session_id: SessionId::new("v").unwrap(),
            message: message.to_string(),
            question: "What is your company name?".to_string(),
            question_type: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn short_company_name_can_be_valid() {
        let handler = handler(MockAIProvider::new().with_response("VALID"));
        assert!(handler.handle(cmd("Acme")).await);
    }

    #[tokio::test]
    async fn slow_verdict_rejects() {
        let mock = MockAIProvider::new()
            .with_response("VALID")
            .with_delay(Duration::from_millis(300));
        let handler = handler(mock).with_timeout(Duration::from_millis(50));

        assert!(!handler.handle(cmd("Acme")).await);
    }

    #[tokio::test]
    async fn outage_rejects() {
        let handler = handler(MockAIProvider::failing(MockError::AuthenticationFailed));
        assert!(!handler.handle(cmd("Acme")).await);
    }
}
