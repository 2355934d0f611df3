//! Personalized program plan built from Step-1 answers.
//!
//! Two renderings share the same extracted facts: the prompt sent to the
//! generation service, and an offline template used when that call fails.

use super::questions::{
    answer_or, Answers, COMPANY_DESCRIPTION, COMPANY_NAME, COMPANY_SCOPE, CUSTOMER_DESCRIPTION,
    POSITIONING_EXPERIENCE, PRODUCT_NAME,
};
use super::step::WorkflowStep;

/// Step-1 facts with the defaults used when an answer is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFacts<'a> {
    pub company_name: &'a str,
    pub company_description: &'a str,
    pub customer_description: &'a str,
    pub positioning_experience: &'a str,
    pub company_scope: &'a str,
    /// Empty when the user did not name a product.
    pub product_name: &'a str,
}

impl<'a> PlanFacts<'a> {
    pub fn from_answers(answers: &'a Answers) -> Self {
        Self {
            company_name: answer_or(answers, COMPANY_NAME, "Your company"),
            company_description: answer_or(answers, COMPANY_DESCRIPTION, "your business"),
            customer_description: answer_or(answers, CUSTOMER_DESCRIPTION, "your customers"),
            positioning_experience: answer_or(answers, POSITIONING_EXPERIENCE, "positioning"),
            company_scope: answer_or(answers, COMPANY_SCOPE, "your company"),
            product_name: answer_or(answers, PRODUCT_NAME, ""),
        }
    }

    /// What the exercise covers: the named product, else the scope.
    pub fn scope_text(&self) -> String {
        if self.product_name.is_empty() {
            self.company_scope.to_lowercase()
        } else {
            format!("{} specifically", self.product_name)
        }
    }
}

/// Builds the generation prompt for the personalized plan.
pub fn plan_prompt(facts: &PlanFacts<'_>) -> String {
    let mut context = format!(
        "Company Information:\n\
         - Company Name: {}\n\
         - Business Description: {}\n\
         - Customer Description: {}\n\
         - Positioning Experience: {}\n\
         - Company Scope: {}",
        facts.company_name,
        facts.company_description,
        facts.customer_description,
        facts.positioning_experience,
        facts.company_scope,
    );
    if !facts.product_name.is_empty() {
        context.push_str(&format!("\n- Product Name: {}", facts.product_name));
    }

    let steps: String = WorkflowStep::ALL
        .iter()
        .map(|step| format!("{}. {}\n", step.number(), step.title()))
        .collect();

    format!(
        "Based on the following information about {}, generate a personalized PMM (Positioning & Messaging) plan that outlines how we'll help them through our 11-step workflow.\n\n\
         {}\n\n\
         Create a brief, personalized plan that mentions all 11 steps of our PMM workflow:\n\
         {}\n\
         Make it conversational and specific to their business. Explain how each step will help them achieve their positioning and messaging goals.",
        facts.company_name, context, steps,
    )
}

/// Renders the plan without the generation service.
///
/// Mentions every step title exactly once.
pub fn fallback_plan(facts: &PlanFacts<'_>) -> String {
    use WorkflowStep::*;

    let company = facts.company_name;
    let line = |step: WorkflowStep, body: String| {
        format!("**Step {}: {}** - {}\n\n", step.number(), step.title(), body)
    };

    let mut plan = format!(
        "\u{1F389} **Great! You've completed Step {}: {}**\n\n\
         Based on your responses about **{}**, here's how I'll help you through our comprehensive PMM workflow:\n\n\
         **Your Personalized PMM Journey:**\n\n",
        ContextGathering.number(),
        ContextGathering.title(),
        company,
    );

    plan.push_str(&line(
        CustomerUnderstanding,
        format!(
            "We'll dive deep into understanding {} to create detailed customer personas.",
            facts.customer_description
        ),
    ));
    plan.push_str(&line(
        StakeholderInterviews,
        "We'll gather insights from key stakeholders and customers to inform your positioning."
            .to_string(),
    ));
    plan.push_str(&line(
        CompetitivePositioning,
        "We'll analyze your competitive landscape and define your market category.".to_string(),
    ));
    plan.push_str(&line(
        FeatureBenefitTranslation,
        format!(
            "We'll translate what {} offers into compelling customer benefits.",
            facts.company_description
        ),
    ));
    plan.push_str(&line(
        PositioningStatement,
        format!("We'll craft clear, compelling positioning statements for **{}**.", company),
    ));
    plan.push_str(&line(
        PositioningWorkshop,
        "We'll facilitate workshops to refine and validate your positioning.".to_string(),
    ));
    plan.push_str(&line(
        MessagingFramework,
        "We'll develop your core messaging framework and brand essence.".to_string(),
    ));
    plan.push_str(&line(
        ProofPoints,
        "We'll create supporting evidence and compelling narratives.".to_string(),
    ));
    plan.push_str(&line(
        AssetGeneration,
        "We'll develop marketing assets and content.".to_string(),
    ));
    plan.push_str(&line(
        MessageTesting,
        "We'll test and optimize your messaging for maximum impact.".to_string(),
    ));

    plan.push_str(&format!(
        "Since you're doing this {} for {}, we'll tailor each step to your specific needs and goals.",
        facts.positioning_experience.to_lowercase(),
        facts.scope_text(),
    ));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    mod facts {
        use super::*;

        #[test]
        fn missing_answers_take_defaults() {
            let empty = Answers::new();
            let facts = PlanFacts::from_answers(&empty);

            assert_eq!(facts.company_name, "Your company");
            assert_eq!(facts.company_description, "your business");
            assert_eq!(facts.customer_description, "your customers");
            assert_eq!(facts.positioning_experience, "positioning");
            assert_eq!(facts.company_scope, "your company");
            assert_eq!(facts.product_name, "");
        }

        #[test]
        fn scope_text_prefers_product_name() {
            let a = answers(&[(COMPANY_SCOPE, "Specific segment/product"), (PRODUCT_NAME, "Ledger")]);
            assert_eq!(PlanFacts::from_answers(&a).scope_text(), "Ledger specifically");

            let a = answers(&[(COMPANY_SCOPE, "Whole company")]);
            assert_eq!(PlanFacts::from_answers(&a).scope_text(), "whole company");
        }
    }

    mod prompt {
        use super::*;

        #[test]
        fn lists_all_steps_and_facts() {
            let a = answers(&[(COMPANY_NAME, "Acme"), (PRODUCT_NAME, "Rocket")]);
            let prompt = plan_prompt(&PlanFacts::from_answers(&a));

            assert!(prompt.contains("information about Acme"));
            assert!(prompt.contains("- Product Name: Rocket"));
            for step in WorkflowStep::ALL {
                assert!(prompt.contains(&format!("{}. {}", step.number(), step.title())));
            }
        }

        #[test]
        fn omits_product_line_without_product() {
            let prompt = plan_prompt(&PlanFacts::from_answers(&Answers::new()));
            assert!(!prompt.contains("Product Name"));
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn mentions_each_step_title_exactly_once() {
            let plan = fallback_plan(&PlanFacts::from_answers(&Answers::new()));
            for step in WorkflowStep::ALL {
                assert_eq!(plan.matches(step.title()).count(), 1, "{}", step.title());
            }
        }

        #[test]
        fn substitutes_company_name_verbatim() {
            let a = answers(&[(COMPANY_NAME, "Acme Rockets, Inc.")]);
            let plan = fallback_plan(&PlanFacts::from_answers(&a));
            assert!(plan.contains("about **Acme Rockets, Inc.**"));
            assert!(plan.contains("statements for **Acme Rockets, Inc.**"));
        }

        #[test]
        fn defaults_read_naturally() {
            let plan = fallback_plan(&PlanFacts::from_answers(&Answers::new()));
            assert!(plan.contains("Your company"));
            assert!(plan.contains("understanding your customers"));
            assert!(!plan.contains("your your"));
            assert!(plan.ends_with(
                "Since you're doing this positioning for your company, we'll tailor each step to your specific needs and goals."
            ));
        }

        #[test]
        fn opens_with_celebration_heading() {
            let plan = fallback_plan(&PlanFacts::from_answers(&Answers::new()));
            assert!(plan.starts_with(
                "\u{1F389} **Great! You've completed Step 1: Context Gathering & Planning**"
            ));
        }

        #[test]
        fn default_descriptions_are_not_doubled() {
            let plan = fallback_plan(&PlanFacts::from_answers(&Answers::new()));
            assert!(plan.contains("translate what your business offers"));
            assert!(!plan.contains("your your"));
        }

        #[test]
        fn closing_uses_experience_and_product() {
            let a = answers(&[
                (POSITIONING_EXPERIENCE, "First time"),
                (COMPANY_SCOPE, "Specific segment/product"),
                (PRODUCT_NAME, "Ledger"),
            ]);
            let plan = fallback_plan(&PlanFacts::from_answers(&a));
            assert!(plan.contains("doing this first time for Ledger specifically"));
        }
    }
}
