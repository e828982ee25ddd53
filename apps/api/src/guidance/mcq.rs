//! Aptitude questionnaire generation.
//!
//! The model is asked for a fixed number of four-option questions. Short
//! replies are retried, long ones truncated, and every accepted question is
//! checked for shape before it reaches the client.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::guidance::profile::StudentProfile;
use crate::guidance::prompts::MCQ_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{parse_json_object, LlmError, TextGenerator};

pub const QUESTION_COUNT: usize = 20;
pub const OPTION_COUNT: usize = 4;
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct McqSet {
    pub questions: Vec<Mcq>,
}

/// Lenient mirror of the model's reply so that shape problems surface as
/// validation failures rather than parse errors.
#[derive(Debug, Deserialize)]
struct McqReply {
    questions: Option<Vec<RawMcq>>,
}

#[derive(Debug, Deserialize)]
struct RawMcq {
    #[serde(default)]
    question: String,
    #[serde(default)]
    options: Vec<String>,
}

pub fn build_mcq_prompt(profile: &StudentProfile) -> String {
    let mut lines = vec![format!(
        "- Current Education Level: {}",
        non_empty_or(&profile.education_level, "Not provided")
    )];
    if let Some(stream) = profile.stream.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("- Stream: {stream}"));
    }
    if let Some(field) = profile
        .field_of_study
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        lines.push(format!("- Field of Study: {field}"));
    }
    lines.extend(
        profile
            .interests()
            .into_iter()
            .map(|(label, answer)| format!("- {label}: {answer}")),
    );

    fill_template(
        MCQ_PROMPT_TEMPLATE,
        &[
            ("{profile}", lines.join("\n").as_str()),
            ("{question_count}", QUESTION_COUNT.to_string().as_str()),
            ("{json_only}", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Generates exactly `QUESTION_COUNT` questions, retrying short replies.
pub async fn generate_mcqs(
    llm: &dyn TextGenerator,
    profile: &StudentProfile,
) -> Result<McqSet, LlmError> {
    let prompt = build_mcq_prompt(profile);

    for attempt in 1..=MAX_ATTEMPTS {
        info!(attempt, "generating questionnaire");
        let text = llm.generate(&prompt).await?;
        let reply: McqReply = parse_json_object(&text)?;
        let mut questions = reply
            .questions
            .ok_or_else(|| LlmError::Malformed("questions array not found".to_string()))?;

        if questions.len() < QUESTION_COUNT {
            warn!(
                attempt,
                received = questions.len(),
                "too few questions, retrying"
            );
            if attempt == MAX_ATTEMPTS {
                return Err(LlmError::Malformed(format!(
                    "expected {QUESTION_COUNT} questions after {MAX_ATTEMPTS} attempts, last reply had {}",
                    questions.len()
                )));
            }
            continue;
        }

        questions.truncate(QUESTION_COUNT);
        return validate(questions).map(|questions| McqSet { questions });
    }

    Err(LlmError::Malformed(format!(
        "no questionnaire after {MAX_ATTEMPTS} attempts"
    )))
}

fn validate(raw: Vec<RawMcq>) -> Result<Vec<Mcq>, LlmError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, q)| {
            if q.question.trim().is_empty() || q.options.len() != OPTION_COUNT {
                return Err(LlmError::Malformed(format!(
                    "question {i} must have text and exactly {OPTION_COUNT} options"
                )));
            }
            Ok(Mcq {
                question: q.question,
                options: q.options,
            })
        })
        .collect()
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
