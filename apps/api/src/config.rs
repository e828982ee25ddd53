use anyhow::{Context, Result};

use crate::courses::matcher::DEFAULT_RESULT_LIMIT;

/// Application configuration loaded from environment variables.
///
/// Nothing is strictly required: without `GEMINI_API_KEY` the guidance
/// endpoints degrade (chat answers from canned replies, the rest return 502),
/// and without `DATABASE_URL` career maps are not persisted.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Maximum number of courses returned by a career-title search (1 to 6).
    pub course_result_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            database_url: optional_env("DATABASE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            course_result_limit: match optional_env("COURSE_RESULT_LIMIT") {
                Some(raw) => parse_limit(&raw)?,
                None => DEFAULT_RESULT_LIMIT,
            },
        })
    }
}

/// Unset, empty and the `.env.example` placeholder all count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.starts_with("your_"))
}

fn parse_limit(raw: &str) -> Result<usize> {
    let limit = raw
        .parse::<usize>()
        .context("COURSE_RESULT_LIMIT must be a positive integer")?;
    anyhow::ensure!(
        (1..=DEFAULT_RESULT_LIMIT).contains(&limit),
        "COURSE_RESULT_LIMIT must be between 1 and {DEFAULT_RESULT_LIMIT}"
    );
    Ok(limit)
}
