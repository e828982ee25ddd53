//! Axum route handlers for the Guidance API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::guidance::career_map::{
    generate_career_map, latest_career_map, save_best_effort, CareerMap, CareerMapRequest,
};
use crate::guidance::chat;
use crate::guidance::mcq::{generate_mcqs, McqSet};
use crate::guidance::profile::StudentProfile;
use crate::guidance::resources::{career_resources, CareerResources};
use crate::llm_client::ChatMessage;
use crate::models::career_map::CareerMapRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LatestCareerMapQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ResourcesRequest {
    #[serde(default, alias = "careerTitle")]
    pub career_title: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/guidance/mcqs
pub async fn handle_generate_mcqs(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<McqSet>, AppError> {
    info!(level = %profile.education_level, "questionnaire requested");
    let set = generate_mcqs(state.llm.as_ref(), &profile).await?;
    Ok(Json(set))
}

/// POST /api/v1/guidance/career-map
///
/// Persists the map when a `user_id` is given and a database is configured.
pub async fn handle_generate_career_map(
    State(state): State<AppState>,
    Json(req): Json<CareerMapRequest>,
) -> Result<Json<CareerMap>, AppError> {
    let map = generate_career_map(state.llm.as_ref(), &req).await?;
    save_best_effort(state.db.as_ref(), req.user_id, &map).await;
    Ok(Json(map))
}

/// GET /api/v1/guidance/career-map/latest?user_id=
pub async fn handle_latest_career_map(
    State(state): State<AppState>,
    Query(query): Query<LatestCareerMapQuery>,
) -> Result<Json<CareerMapRow>, AppError> {
    let pool = state.db.as_ref().ok_or_else(|| {
        AppError::NotFound("Career map storage is not configured".to_string())
    })?;

    latest_career_map(pool, query.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("No career map saved for user {}", query.user_id))
        })
}

/// POST /api/v1/guidance/resources
pub async fn handle_career_resources(
    State(state): State<AppState>,
    Json(req): Json<ResourcesRequest>,
) -> Result<Json<CareerResources>, AppError> {
    let career_title = req.career_title.trim();
    if career_title.is_empty() {
        return Err(AppError::Validation("career_title is required".to_string()));
    }

    let resources =
        career_resources(state.llm.as_ref(), &state.course_matcher, career_title).await;
    Ok(Json(resources))
}

/// POST /api/v1/guidance/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.messages.is_empty() {
        return Err(AppError::Validation("messages are required".to_string()));
    }

    let content = chat::reply(state.llm.as_ref(), &req.messages).await?;
    Ok(Json(ChatResponse { content }))
}
