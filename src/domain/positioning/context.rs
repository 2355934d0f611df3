//! Step-conditioned context for reply prompts.
//!
//! Every forward-moving reply is grounded in two things: what the current
//! step is trying to achieve, and what the user has already told us. This
//! module renders both into a single instruction block. It is a pure
//! function of its inputs.

use super::questions::Answers;
use super::step::WorkflowStep;

/// Instruction used when the step number is outside the program.
pub const GENERIC_CONTEXT: &str = "You are helping with positioning and messaging.";

/// Heading that introduces the rendered answers.
pub const USER_CONTEXT_HEADING: &str = "User Context:";

/// Renders the instruction block for `step`, followed by the known answers.
///
/// Steps 1 through 11 get their hand-authored paragraph; any other number
/// gets [`GENERIC_CONTEXT`]. When `answers` is non-empty a "User Context"
/// block lists every answer as `- key: value`, one per line, in the map's
/// iteration order.
pub fn build_context(step: i32, answers: &Answers) -> String {
    let mut context = match WorkflowStep::from_number(step) {
        Some(step) => step_instructions(step).to_string(),
        None => GENERIC_CONTEXT.to_string(),
    };

    if !answers.is_empty() {
        context.push_str("\n\n");
        context.push_str(USER_CONTEXT_HEADING);
        context.push('\n');
        for (key, value) in answers {
            context.push_str(&format!("- {}: {}\n", key, value));
        }
    }

    context
}

/// Returns the hand-authored instruction paragraph for a step.
pub fn step_instructions(step: WorkflowStep) -> &'static str {
    match step {
        WorkflowStep::ContextGathering => CONTEXT_GATHERING,
        WorkflowStep::CustomerUnderstanding => CUSTOMER_UNDERSTANDING,
        WorkflowStep::StakeholderInterviews => STAKEHOLDER_INTERVIEWS,
        WorkflowStep::CompetitivePositioning => COMPETITIVE_POSITIONING,
        WorkflowStep::FeatureBenefitTranslation => FEATURE_BENEFIT_TRANSLATION,
        WorkflowStep::PositioningStatement => POSITIONING_STATEMENT,
        WorkflowStep::PositioningWorkshop => POSITIONING_WORKSHOP,
        WorkflowStep::MessagingFramework => MESSAGING_FRAMEWORK,
        WorkflowStep::ProofPoints => PROOF_POINTS,
        WorkflowStep::AssetGeneration => ASSET_GENERATION,
        WorkflowStep::MessageTesting => MESSAGE_TESTING,
    }
}

// ============================================================================
// Step Instructions
// ============================================================================

const CONTEXT_GATHERING: &str = r#"You are helping with Step 1: Context Gathering & Planning.

The user is answering questions about:
- Company name
- Company description
- Customer description
- Positioning experience (first time vs repositioning)
- Company scope (whole company vs specific segment)

Be conversational and encouraging. Ask follow-up questions if responses are unclear."#;

const CUSTOMER_UNDERSTANDING: &str = r#"You are helping with Step 2: Customer Understanding & Persona Development.

The user has been asked to upload persona documents or indicate they don't have them.
If they mention uploading documents, acknowledge it and proceed with automated research.
If they say they don't have personas, provide the research todo list and ask if they want automated research.
If they want automated research, conduct competitor research to identify ICP, buyers, influencers, and users.

Focus on understanding the target customers in detail through:
- Document analysis (if uploaded)
- Automated competitor research
- Customer persona development
- ICP identification"#;

const STAKEHOLDER_INTERVIEWS: &str = r#"You are helping with Step 3: Stakeholder & Customer Interviews.

Focus on gathering insights from stakeholders and customers. Ask about:
- Key stakeholders
- Interview insights
- Customer feedback
- Market research"#;

const COMPETITIVE_POSITIONING: &str = r#"You are helping with Step 4: Category & Competitive Positioning.

Focus on competitive landscape and market positioning. Ask about:
- Competitors
- Market category
- Differentiation
- Competitive advantages"#;

const FEATURE_BENEFIT_TRANSLATION: &str = r#"You are helping with Step 5: Feature/Benefit Translation ("Product Legos").

Focus on translating features into benefits. Ask about:
- Key features
- Customer benefits
- Value propositions
- Product capabilities"#;

const POSITIONING_STATEMENT: &str = r#"You are helping with Step 6: Positioning Statement Creation.

Focus on creating clear positioning statements. Ask about:
- Target audience
- Market category
- Key benefit
- Proof points"#;

const POSITIONING_WORKSHOP: &str = r#"You are helping with Step 7: Positioning Workshop Facilitation.

Focus on facilitating positioning workshops. Ask about:
- Workshop participants
- Key insights
- Decisions made
- Next steps"#;

const MESSAGING_FRAMEWORK: &str = r#"You are helping with Step 8: Messaging Framework & Brand Essence.

Focus on developing messaging frameworks. Ask about:
- Brand essence
- Key messages
- Tone and voice
- Messaging hierarchy"#;

const PROOF_POINTS: &str = r#"You are helping with Step 9: Proof Points & Narrative.

Focus on developing proof points and narratives. Ask about:
- Supporting evidence
- Customer stories
- Case studies
- Success metrics"#;

const ASSET_GENERATION: &str = r#"You are helping with Step 10: Asset Generation & Application.

Focus on creating marketing assets. Ask about:
- Asset types needed
- Content requirements
- Distribution channels
- Asset specifications"#;

const MESSAGE_TESTING: &str = r#"You are helping with Step 11: Asset Inventory & Message Testing.

Focus on testing and optimizing messages. Ask about:
- Testing methods
- Performance metrics
- Optimization opportunities
- Final recommendations"#;
