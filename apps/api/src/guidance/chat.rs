//! Counselor chat.

use tracing::{info, warn};

use crate::guidance::prompts::CHAT_GREETING;
use crate::llm_client::prompts::COUNSELOR_PERSONA;
use crate::llm_client::{ChatMessage, LlmError, TextGenerator};

/// Number of trailing messages forwarded to the model.
pub const HISTORY_WINDOW: usize = 6;
pub const MAX_REPLY_TOKENS: u32 = 120;

/// Keyword groups checked in order; the first group with a hit wins.
const CANNED_REPLIES: &[(&[&str], &str)] = &[
    (
        &["career", "job", "profession"],
        "I can help you explore career options! Consider your interests, skills, and values. \
         What subjects do you enjoy most?",
    ),
    (
        &["engineering", "tech"],
        "Engineering offers great opportunities! Focus on math and science. Consider computer \
         science, mechanical, or civil engineering based on your interests.",
    ),
    (
        &["medical", "doctor", "health"],
        "Medical field is rewarding but requires dedication. You'll need strong biology and \
         chemistry knowledge. Consider MBBS, nursing, or allied health courses.",
    ),
    (
        &["college", "university", "admission"],
        "For college selection, research rankings, faculty, placement records, and campus \
         culture. Consider your budget and location preferences too.",
    ),
    (
        &["exam", "preparation", "study"],
        "Create a study schedule and stick to it. Practice previous year papers and take mock \
         tests regularly. Focus on weak areas.",
    ),
    (
        &["stream", "subject", "course"],
        "Choose your stream based on interests and career goals. Science offers engineering and \
         medical paths. Commerce leads to business careers. Arts provides diverse options.",
    ),
    (
        &["salary", "money", "income"],
        "Salaries vary by field and experience. Engineering and medicine typically offer good \
         packages. Research current market trends for your chosen field.",
    ),
    (
        &["future", "trend", "growth"],
        "Future job markets favor technology, healthcare, and sustainability. Develop digital \
         skills and stay updated with industry trends.",
    ),
    (
        &["help", "guidance", "advice"],
        "I'm here to help! Ask me about specific careers, colleges, exams, or any career-related \
         questions. What would you like to know?",
    ),
];

const DEFAULT_REPLY: &str = "That's an interesting question! Could you tell me more about your \
    specific situation or what you'd like to explore?";

/// Offline answer for `message`, matched by lowercase substring.
pub fn canned_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    CANNED_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// Persona exchange followed by the last `HISTORY_WINDOW` messages.
pub fn build_transcript(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let recent = &messages[messages.len().saturating_sub(HISTORY_WINDOW)..];
    let mut turns = Vec::with_capacity(recent.len() + 2);
    turns.push(ChatMessage::user(CHAT_GREETING));
    turns.push(ChatMessage::model(COUNSELOR_PERSONA));
    turns.extend_from_slice(recent);
    turns
}

/// Replies to the last message. Falls back to the canned table when the
/// generator has no credentials.
///
/// `messages` must be non-empty; the handler enforces it.
pub async fn reply(llm: &dyn TextGenerator, messages: &[ChatMessage]) -> Result<String, LlmError> {
    let last = messages
        .last()
        .ok_or_else(|| LlmError::Malformed("no messages to answer".to_string()))?;

    if !llm.is_configured() {
        warn!("GEMINI_API_KEY not configured, answering chat from canned replies");
        return Ok(canned_reply(&last.content).to_string());
    }

    let turns = build_transcript(messages);
    info!(turns = turns.len(), "chat request");
    llm.chat(&turns, MAX_REPLY_TOKENS).await
}
