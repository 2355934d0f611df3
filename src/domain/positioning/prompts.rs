//! Prompt templates for the conversation pipeline and the answer validator.
//!
//! Each template asks the generation service either for a literal decision
//! token (see [`super::decision`]) or for free conversational text.

use super::decision::{COMPLETE_TOKEN, INVALID_TOKEN, NEEDS_FOLLOWUP_TOKEN, VALID_TOKEN};

/// Returned by the pipeline if no terminal node produced text.
pub const FALLBACK_REPLY: &str =
    "I'm here to help with your positioning and messaging journey. How can I assist you?";

/// Asks whether the latest user turn needs clarification.
pub fn classification_prompt(user_message: &str, step: i32) -> String {
    format!(
        r#"Analyze this user response for clarity and completeness.
Determine if follow-up questions are needed.

Response: {user_message}
Current Step: {step}

Return '{NEEDS_FOLLOWUP_TOKEN}' if the response is unclear, too brief, or needs clarification.
Return '{COMPLETE_TOKEN}' if the response is clear and sufficient."#
    )
}

/// Asks for one or two clarifying questions about the user's own words.
pub fn followup_prompt(user_message: &str) -> String {
    format!(
        r#"The user provided this response: "{user_message}"

This response needs clarification. Generate 1-2 specific follow-up questions to get clearer, more detailed information.

Be conversational and helpful. Ask for specific details, examples, or clarification."#
    )
}

/// Wraps the step context and the user's message into the reply request.
pub fn reply_prompt(context: &str, user_message: &str) -> String {
    format!(
        r#"{context}

User message: {user_message}

Provide a helpful, conversational response. If this is a response to a specific question, acknowledge it and ask the next question if appropriate."#
    )
}

/// Asks for a one-word verdict on a form answer.
pub fn validation_prompt(message: &str, question: &str, question_type: &str) -> String {
    format!(
        r#"You are a validator for user responses in a PMM Assistant conversational interface.

Question: {question}
Question Type: {question_type}
User Response: "{message}"

Evaluate this response based on:
1. Is it relevant to the question asked?
2. Is it a meaningful, helpful response?
3. Does it provide useful information?

IMPORTANT: You must respond with EXACTLY one word:
- "{VALID_TOKEN}" if the response is relevant, meaningful, and helpful
- "{INVALID_TOKEN}" if the response is too generic, unhelpful, or meaningless

Note: Company names, business descriptions, and clear answers are VALID even if brief.

Response (VALID or INVALID only):"#
    )
}
