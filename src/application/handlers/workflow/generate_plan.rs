//! GeneratePlanHandler - builds the personalized program plan.

use std::time::Duration;
use tracing::{info, warn};

use crate::application::guidance::PlanSynthesizer;
use crate::domain::foundation::SessionId;
use crate::domain::positioning::{fallback_plan, Answers, PlanFacts};

use super::deadline::{within, DEFAULT_GENERATION_TIMEOUT};

/// Command to generate a plan from the supplied Step-1 answers.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub session_id: SessionId,
    pub responses: Answers,
}

/// Handler for plan generation. Always yields a plan; the offline
/// template also covers a timeout.
pub struct GeneratePlanHandler {
    synthesizer: PlanSynthesizer,
    timeout: Duration,
}

impl GeneratePlanHandler {
    pub fn new(synthesizer: PlanSynthesizer) -> Self {
        Self {
            synthesizer,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn handle(&self, cmd: GeneratePlanCommand) -> String {
        info!(
            session_id = %cmd.session_id,
            answers = cmd.responses.len(),
            "Generating plan"
        );
        let plan = self
            .synthesizer
            .generate_plan(&cmd.responses, Some(&cmd.session_id));
        match within(self.timeout, plan).await {
            Ok(plan) => plan,
            Err(err) => {
                warn!(session_id = %cmd.session_id, error = %err, "Plan generation timed out, using offline template");
                fallback_plan(&PlanFacts::from_answers(&cmd.responses))
            }
        }
    }
}
