//! Positioning module - the guided positioning & messaging program.
//!
//! Pure domain logic: the step catalogue, the prompt context builder, the
//! decision-token parsers, the per-message pipeline machine, the session
//! aggregate and every prompt template. Nothing here performs I/O.

mod context;
mod decision;
mod pipeline;
mod plan;
mod prompts;
mod questions;
mod research;
mod session;
mod step;

pub use context::{build_context, step_instructions, GENERIC_CONTEXT, USER_CONTEXT_HEADING};
pub use decision::{
    parse_classification, parse_verdict, AmbiguousOutput, Classification, Verdict,
    COMPLETE_TOKEN, INVALID_TOKEN, NEEDS_FOLLOWUP_TOKEN, VALID_TOKEN,
};
pub use pipeline::{route, PipelineNode, Route};
pub use plan::{fallback_plan, plan_prompt, PlanFacts};
pub use prompts::{
    classification_prompt, followup_prompt, reply_prompt, validation_prompt, FALLBACK_REPLY,
};
pub use questions::{
    answer_or, questions_for_step, unanswered_questions, Answers, Question, QuestionKind,
    COMPANY_DESCRIPTION, COMPANY_NAME, COMPANY_SCOPE, CUSTOMER_DESCRIPTION,
    POSITIONING_EXPERIENCE, PRODUCT_NAME,
};
pub use research::{research_prompt, ResearchFacts, NO_RESPONSES_MESSAGE, RESEARCH_TODO};
pub use session::{Session, Turn, TurnRole};
pub use step::WorkflowStep;
