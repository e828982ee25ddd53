//! Scripted `TextGenerator` shared by the guidance tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::llm_client::{ChatMessage, LlmError, TextGenerator};

/// Replays canned replies in order, recording every prompt and chat transcript.
pub struct ScriptedGenerator {
    replies: Mutex<Vec<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
    transcripts: Mutex<Vec<(Vec<ChatMessage>, u32)>>,
}

impl ScriptedGenerator {
    pub fn new(mut replies: Vec<Result<String, LlmError>>) -> Self {
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
            transcripts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u32 {
        (self.prompts.lock().unwrap().len() + self.transcripts.lock().unwrap().len()) as u32
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn last_transcript(&self) -> Option<(Vec<ChatMessage>, u32)> {
        self.transcripts.lock().unwrap().last().cloned()
    }

    fn next(&self) -> Result<String, LlmError> {
        self.replies
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.next()
    }

    async fn chat(&self, turns: &[ChatMessage], max_output_tokens: u32) -> Result<String, LlmError> {
        self.transcripts
            .lock()
            .unwrap()
            .push((turns.to_vec(), max_output_tokens));
        self.next()
    }
}

/// A fenced questionnaire reply with `count` questions of `options` choices each.
pub fn questions_json(count: usize, options: usize) -> String {
    let questions: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "question": format!("Question {i}?"),
                "options": (0..options).map(|o| format!("Option {o}")).collect::<Vec<_>>(),
            })
        })
        .collect();
    format!("```json\n{}\n```", json!({ "questions": questions }))
}

/// A prose-wrapped career map with a single option.
pub fn career_map_reply() -> String {
    format!(
        "Here is the map you asked for:\n{}\nGood luck!",
        json!({
            "stream_suggestion": { "stream": "Science", "reason": "Strong in maths." },
            "career_options": [{
                "title": "Software Engineer",
                "description": "Builds software.",
                "colleges": ["IIT Delhi"],
                "job_opportunities": [
                    { "title": "Backend Developer", "avg_salary": "₹8 LPA", "market_trend": "up" }
                ]
            }]
        })
    )
}
