//! Plan and research synthesizers - single-shot generators over Step-1
//! answers.

use tracing::{info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::positioning::{
    fallback_plan, plan_prompt, research_prompt, Answers, PlanFacts, ResearchFacts,
};
use crate::ports::{AIError, GenerationPurpose};

use super::GenerationClient;

/// Turns Step-1 answers into a personalized program plan.
#[derive(Clone)]
pub struct PlanSynthesizer {
    client: GenerationClient,
}

impl PlanSynthesizer {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Always returns a usable plan: the offline template replaces the
    /// generated one when the call fails.
    pub async fn generate_plan(&self, responses: &Answers, session_id: Option<&SessionId>) -> String {
        let facts = PlanFacts::from_answers(responses);

        match self
            .client
            .generate_from_prompt(plan_prompt(&facts), GenerationPurpose::Plan, session_id)
            .await
        {
            Ok(plan) => {
                info!(company = facts.company_name, "Generated personalized plan");
                plan
            }
            Err(err) => {
                warn!(error = %err, "Plan generation failed, using offline template");
                fallback_plan(&facts)
            }
        }
    }
}

/// Produces a structured market-research report from Step-1 answers.
#[derive(Clone)]
pub struct ResearchSynthesizer {
    client: GenerationClient,
}

impl ResearchSynthesizer {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Returns the report, or a readable error string if the call fails.
    pub async fn research(&self, responses: &Answers, session_id: Option<&SessionId>) -> String {
        let facts = ResearchFacts::from_answers(responses);

        match self
            .client
            .generate_from_prompt(research_prompt(&facts), GenerationPurpose::Research, session_id)
            .await
        {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "Research generation failed");
                Self::failure_report(&err)
            }
        }
    }

    /// The text returned in place of a report when generation fails.
    pub fn failure_report(err: &AIError) -> String {
        format!("Error conducting research: {}", err)
    }
}
