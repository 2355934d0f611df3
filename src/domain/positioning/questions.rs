//! Question catalogue and the answer mapping collected from the user.

use serde::Serialize;
use std::collections::BTreeMap;

use super::step::WorkflowStep;

/// Free-text answers keyed by question identifier.
///
/// A `BTreeMap` keeps iteration order stable, so anything rendered from the
/// answers (prompt context blocks in particular) is reproducible.
pub type Answers = BTreeMap<String, String>;

pub const COMPANY_NAME: &str = "company_name";
pub const COMPANY_DESCRIPTION: &str = "company_description";
pub const CUSTOMER_DESCRIPTION: &str = "customer_description";
pub const POSITIONING_EXPERIENCE: &str = "positioning_experience";
pub const COMPANY_SCOPE: &str = "company_scope";
pub const PRODUCT_NAME: &str = "product_name";

/// How a question is presented in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Textarea,
    Select,
}

impl QuestionKind {
    /// Wire name, also passed to the validator as the question type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

/// A catalogued question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
    pub required: bool,
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

static STEP_ONE_QUESTIONS: [Question; 5] = [
    Question {
        id: COMPANY_NAME,
        question: "What is your company name?",
        kind: QuestionKind::Text,
        options: &[],
        required: true,
    },
    Question {
        id: COMPANY_DESCRIPTION,
        question: "Please provide a brief description of what your company does.",
        kind: QuestionKind::Textarea,
        options: &[],
        required: true,
    },
    Question {
        id: CUSTOMER_DESCRIPTION,
        question: "Please provide a brief description of who your customers are.",
        kind: QuestionKind::Textarea,
        options: &[],
        required: true,
    },
    Question {
        id: POSITIONING_EXPERIENCE,
        question: "Are you doing the positioning and messaging exercise for the first time, or are you repositioning an existing brand?",
        kind: QuestionKind::Select,
        options: &["First time", "Repositioning existing brand"],
        required: true,
    },
    Question {
        id: COMPANY_SCOPE,
        question: "Are you doing this exercise for the whole company or a specific segment/product?",
        kind: QuestionKind::Select,
        options: &["Whole company", "Specific segment/product"],
        required: true,
    },
];

/// Returns the catalogued questions for a step.
///
/// Only Step 1 has a form today; later steps are purely conversational.
pub fn questions_for_step(step: WorkflowStep) -> &'static [Question] {
    match step {
        WorkflowStep::ContextGathering => &STEP_ONE_QUESTIONS,
        _ => &[],
    }
}

/// Returns the catalogued questions of `step` that have no answer yet, in
/// catalogue order.
pub fn unanswered_questions(step: WorkflowStep, answers: &Answers) -> Vec<&'static Question> {
    questions_for_step(step)
        .iter()
        .filter(|q| !answers.contains_key(q.id))
        .collect()
}

/// Returns the answer for `key`, or `default` when it was never given.
pub fn answer_or<'a>(answers: &'a Answers, key: &str, default: &'a str) -> &'a str {
    answers.get(key).map(String::as_str).unwrap_or(default)
}
