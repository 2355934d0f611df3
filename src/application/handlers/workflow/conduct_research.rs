//! ConductResearchHandler - market research from a session's Step-1 answers.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::application::guidance::ResearchSynthesizer;
use crate::domain::foundation::SessionId;
use crate::domain::positioning::NO_RESPONSES_MESSAGE;
use crate::ports::SessionStore;

use super::deadline::{within, DEFAULT_GENERATION_TIMEOUT};
use super::WorkflowError;

/// Command to research the session's market.
#[derive(Debug, Clone)]
pub struct ConductResearchCommand {
    pub session_id: SessionId,
}

/// Handler for competitor research.
pub struct ConductResearchHandler {
    store: Arc<dyn SessionStore>,
    synthesizer: ResearchSynthesizer,
    timeout: Duration,
}

impl ConductResearchHandler {
    pub fn new(store: Arc<dyn SessionStore>, synthesizer: ResearchSynthesizer) -> Self {
        Self {
            store,
            synthesizer,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the report text.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session is unknown
    pub async fn handle(&self, cmd: ConductResearchCommand) -> Result<String, WorkflowError> {
        let session = self
            .store
            .get(&cmd.session_id)
            .await?
            .ok_or_else(|| WorkflowError::not_found(cmd.session_id.clone()))?;

        if session.answers().is_empty() {
            return Ok(NO_RESPONSES_MESSAGE.to_string());
        }

        info!(session_id = %cmd.session_id, "Conducting competitor research");
        let report = self
            .synthesizer
            .research(session.answers(), Some(&cmd.session_id));
        Ok(within(self.timeout, report).await.unwrap_or_else(|err| {
            warn!(session_id = %cmd.session_id, error = %err, "Research timed out");
            ResearchSynthesizer::failure_report(&err)
        }))
    }
}
