use std::sync::Arc;

use sqlx::PgPool;

use crate::colleges::catalog::College;
use crate::config::Config;
use crate::courses::matcher::CourseMatcher;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `DATABASE_URL` is unset; career maps are then not persisted.
    pub db: Option<PgPool>,
    /// Pluggable text generator. Production: GeminiClient, or UnconfiguredGenerator without a key.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
    pub course_matcher: Arc<CourseMatcher>,
    pub colleges: Arc<Vec<College>>,
}
