pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::colleges::handlers as colleges;
use crate::courses::handlers as courses;
use crate::guidance::handlers as guidance;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Courses API
        .route(
            "/api/v1/courses",
            get(courses::handle_list_courses).post(courses::handle_search_courses),
        )
        // Colleges API
        .route(
            "/api/v1/colleges",
            get(colleges::handle_list_colleges).post(colleges::handle_search_colleges),
        )
        // Guidance API (LLM-backed)
        .route("/api/v1/guidance/mcqs", post(guidance::handle_generate_mcqs))
        .route(
            "/api/v1/guidance/career-map",
            post(guidance::handle_generate_career_map),
        )
        .route(
            "/api/v1/guidance/career-map/latest",
            get(guidance::handle_latest_career_map),
        )
        .route(
            "/api/v1/guidance/resources",
            post(guidance::handle_career_resources),
        )
        .route("/api/v1/guidance/chat", post(guidance::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::colleges::catalog::indian_colleges;
    use crate::config::Config;
    use crate::courses::matcher::{CourseMatcher, DEFAULT_RESULT_LIMIT};
    use crate::llm_client::UnconfiguredGenerator;

    fn test_state() -> AppState {
        AppState {
            db: None,
            llm: Arc::new(UnconfiguredGenerator),
            config: Config {
                gemini_api_key: None,
                database_url: None,
                port: 0,
                rust_log: "info".to_string(),
                course_result_limit: DEFAULT_RESULT_LIMIT,
            },
            course_matcher: Arc::new(CourseMatcher::with_builtin_tables()),
            colleges: Arc::new(indian_colleges()),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "disha-api");
        assert_eq!(body["llm_configured"], false);
    }

    #[tokio::test]
    async fn test_courses_search_by_title() {
        let (status, body) = get_json("/api/v1/courses?career_title=Welder").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_courses"], 1);
        assert_eq!(
            body["courses"][0]["title"],
            "Welding and Fabrication Technology"
        );
        assert!(body["last_updated"].is_string());
    }

    #[tokio::test]
    async fn test_courses_listing_without_filters_returns_catalog() {
        let (status, body) = get_json("/api/v1/courses").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_courses"], 55);
    }

    #[tokio::test]
    async fn test_courses_post_camel_case_title() {
        let (status, body) =
            post_json("/api/v1/courses", json!({ "careerTitle": "Welder" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_courses"], 1);
        assert_eq!(
            body["courses"][0]["title"],
            "Welding and Fabrication Technology"
        );
    }

    #[tokio::test]
    async fn test_courses_post_sector_filter() {
        let (status, body) = post_json("/api/v1/courses", json!({ "sector": "healthcare" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_courses"], 5);
    }

    #[tokio::test]
    async fn test_colleges_near_delhi() {
        let (status, body) =
            get_json("/api/v1/colleges?latitude=28.6139&longitude=77.2090").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["search_radius"], 100.0);
        assert_eq!(
            body["colleges"][0]["name"],
            "Indian Institute of Technology Delhi"
        );
        assert_eq!(body["user_location"]["latitude"], 28.6139);
    }

    #[tokio::test]
    async fn test_colleges_post_with_type_and_limit() {
        let (status, body) = post_json(
            "/api/v1/colleges",
            json!({ "latitude": 28.6139, "longitude": 77.2090, "radius": 500, "limit": 2, "type": "ENGINEERING" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(
            body["colleges"][1]["name"],
            "Indian Institute of Technology Roorkee"
        );
    }

    #[tokio::test]
    async fn test_colleges_require_coordinates() {
        let (status, body) = get_json("/api/v1/colleges?latitude=0&longitude=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = get_json("/api/v1/colleges").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_without_key_uses_canned_reply() {
        let (status, body) = post_json(
            "/api/v1/guidance/chat",
            json!({ "messages": [{ "role": "user", "content": "What salary can I expect?" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["content"]
            .as_str()
            .unwrap()
            .starts_with("Salaries vary"));
    }

    #[tokio::test]
    async fn test_chat_requires_messages() {
        let (status, body) = post_json("/api/v1/guidance/chat", json!({ "messages": [] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_resources_require_title() {
        let (status, _) =
            post_json("/api/v1/guidance/resources", json!({ "career_title": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resources_fall_back_without_key() {
        let (status, body) = post_json(
            "/api/v1/guidance/resources",
            json!({ "careerTitle": "Civil Engineer" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["skill_india_digital"]["courses"][0]["title"],
            "Construction and Civil Engineering"
        );
    }

    #[tokio::test]
    async fn test_mcqs_without_key_is_bad_gateway() {
        let (status, body) =
            post_json("/api/v1/guidance/mcqs", json!({ "education_level": "10th" })).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_latest_map_without_database_is_not_found() {
        let (status, body) = get_json(
            "/api/v1/guidance/career-map/latest?user_id=6f1c2b7e-1d2a-4f3b-9c8d-0e1f2a3b4c5d",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
