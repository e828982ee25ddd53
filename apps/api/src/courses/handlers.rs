//! Axum route handlers for the Courses API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::courses::catalog::CourseRecord;
use crate::courses::matcher::CourseFilters;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseRecord>,
    pub total_courses: usize,
    pub last_updated: DateTime<Utc>,
}

impl CourseListResponse {
    fn new(courses: Vec<CourseRecord>) -> Self {
        Self {
            total_courses: courses.len(),
            courses,
            last_updated: Utc::now(),
        }
    }
}

/// GET /api/v1/courses?career_title=&sector=&level=
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(filters): Query<CourseFilters>,
) -> Json<CourseListResponse> {
    Json(list_courses(&state, &filters))
}

/// POST /api/v1/courses
///
/// Same contract as the GET variant, with filters in the JSON body.
pub async fn handle_search_courses(
    State(state): State<AppState>,
    Json(filters): Json<CourseFilters>,
) -> Json<CourseListResponse> {
    Json(list_courses(&state, &filters))
}

fn list_courses(state: &AppState, filters: &CourseFilters) -> CourseListResponse {
    let courses = state.course_matcher.list_all(filters);
    info!(
        career_title = filters.career_title.as_deref().unwrap_or(""),
        matched = courses.len(),
        "course listing"
    );
    CourseListResponse::new(courses)
}
