//! Career-map generation and persistence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::guidance::profile::{ordered_answers, EducationLevel, LocationData, StudentProfile};
use crate::guidance::prompts::{
    CAREER_MAP_PROMPT_TEMPLATE, COLLEGE_INSTRUCTIONS, LOCATION_CONTEXT_TEMPLATE,
    NEAR_LOCATION_SUFFIX, TENTH_INSTRUCTIONS, TWELFTH_INSTRUCTIONS,
};
use crate::llm_client::prompts::{fill_template, join_present, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{generate_json, LlmError, TextGenerator};
use crate::models::career_map::CareerMapRow;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareerMapRequest {
    #[serde(default, alias = "userId")]
    pub user_id: Option<Uuid>,
    #[serde(default, alias = "baseData")]
    pub base_data: StudentProfile,
    #[serde(default, alias = "mcqAnswers")]
    pub mcq_answers: BTreeMap<String, String>,
    #[serde(default, alias = "locationData")]
    pub location_data: Option<LocationData>,
}

// ────────────────────────────────────────────────────────────────────────────
// Career map document
// ────────────────────────────────────────────────────────────────────────────
//
// camelCase aliases accept replies where the model ignored the requested key style.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMap {
    #[serde(
        default,
        alias = "streamSuggestion",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_suggestion: Option<StreamSuggestion>,
    #[serde(alias = "careerOptions")]
    pub career_options: Vec<CareerOption>,
    #[serde(
        default,
        alias = "higherStudies",
        skip_serializing_if = "Option::is_none"
    )]
    pub higher_studies: Option<HigherStudies>,
    #[serde(
        default,
        alias = "businessOpportunities",
        skip_serializing_if = "Option::is_none"
    )]
    pub business_opportunities: Option<BusinessOpportunities>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSuggestion {
    pub stream: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerOption {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colleges: Vec<String>,
    #[serde(default, alias = "jobOpportunities")]
    pub job_opportunities: Vec<JobOpportunity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOpportunity {
    pub title: String,
    #[serde(default, alias = "avgSalary")]
    pub avg_salary: String,
    /// `up`, `down` or `stable`.
    #[serde(default, alias = "marketTrend")]
    pub market_trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HigherStudies {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colleges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessOpportunities {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ideas: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt
// ────────────────────────────────────────────────────────────────────────────

fn location_context(location: Option<&LocationData>) -> Option<String> {
    let location = location?;
    let place = join_present(&[
        location.city.as_deref(),
        location.state.as_deref(),
        location.country.as_deref(),
    ])?;
    Some(fill_template(LOCATION_CONTEXT_TEMPLATE, &[("{location}", place.as_str())]))
}

fn level_instructions(profile: &StudentProfile, has_location: bool) -> String {
    let near = if has_location { NEAR_LOCATION_SUFFIX } else { "" };
    let discipline = profile.discipline().unwrap_or("an unspecified subject");
    let template = match profile.level() {
        EducationLevel::Tenth => TENTH_INSTRUCTIONS,
        EducationLevel::Twelfth => TWELFTH_INSTRUCTIONS,
        EducationLevel::College => COLLEGE_INSTRUCTIONS,
    };
    fill_template(
        template,
        &[
            ("{stream}", discipline),
            ("{field_of_study}", discipline),
            ("{near_location}", near),
        ],
    )
}

pub fn build_career_map_prompt(req: &CareerMapRequest) -> String {
    let profile = &req.base_data;
    let location = location_context(req.location_data.as_ref());

    let mut profile_lines = vec![
        format!(
            "- Education Level: {}",
            Some(profile.education_level.trim())
                .filter(|l| !l.is_empty())
                .unwrap_or("Not provided")
        ),
        format!(
            "- Stream/Field of Study: {}",
            profile.discipline().unwrap_or("Not provided")
        ),
    ];
    profile_lines.extend(
        profile
            .interests()
            .into_iter()
            .map(|(label, answer)| format!("- {label}: {answer}")),
    );

    let answers = ordered_answers(&req.mcq_answers)
        .into_iter()
        .map(|(label, answer)| format!("- {label}: {answer}"))
        .collect::<Vec<_>>()
        .join("\n");

    fill_template(
        CAREER_MAP_PROMPT_TEMPLATE,
        &[
            ("{profile}", profile_lines.join("\n").as_str()),
            ("{location_context}", location.as_deref().unwrap_or("")),
            ("{answers}", answers.as_str()),
            (
                "{instructions}",
                level_instructions(profile, location.is_some()).as_str(),
            ),
            ("{json_only}", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub async fn generate_career_map(
    llm: &dyn TextGenerator,
    req: &CareerMapRequest,
) -> Result<CareerMap, LlmError> {
    let prompt = build_career_map_prompt(req);
    let map: CareerMap = generate_json(llm, &prompt).await?;
    info!(
        options = map.career_options.len(),
        level = %req.base_data.education_level,
        "career map generated"
    );
    Ok(map)
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

pub async fn save_career_map(
    pool: &PgPool,
    user_id: Uuid,
    map: &CareerMap,
) -> Result<CareerMapRow, sqlx::Error> {
    let row = sqlx::query_as::<_, CareerMapRow>(
        r#"
        INSERT INTO results (id, user_id, map_data)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, map_data, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(map))
    .fetch_one(pool)
    .await?;

    info!("Saved career map {} for user {}", row.id, user_id);
    Ok(row)
}

/// Persists when both a pool and a user are present. Failures are logged, never returned.
pub async fn save_best_effort(pool: Option<&PgPool>, user_id: Option<Uuid>, map: &CareerMap) {
    let (Some(pool), Some(user_id)) = (pool, user_id) else {
        return;
    };
    if let Err(e) = save_career_map(pool, user_id, map).await {
        error!("Failed to save career map for user {user_id}: {e}");
    }
}

/// The most recently saved map for a user.
pub async fn latest_career_map(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<CareerMapRow>, sqlx::Error> {
    sqlx::query_as::<_, CareerMapRow>(
        r#"
        SELECT id, user_id, map_data, created_at
        FROM results
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::test_support::{career_map_reply, ScriptedGenerator};

    fn request(level: &str) -> CareerMapRequest {
        CareerMapRequest {
            base_data: StudentProfile {
                education_level: level.to_string(),
                stream: Some("Commerce".to_string()),
                field_of_study: Some("Mechanical Engineering".to_string()),
                hobbies: Some("Robotics".to_string()),
                ..Default::default()
            },
            mcq_answers: [
                ("1".to_string(), "Work in teams".to_string()),
                ("0".to_string(), "Solve puzzles".to_string()),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tenth_prompt_asks_for_stream() {
        let prompt = build_career_map_prompt(&request("10th"));
        assert!(prompt.contains("Suggest the best stream"));
        assert!(!prompt.contains("Do not suggest a stream"));
    }

    #[test]
    fn test_twelfth_prompt_names_stream() {
        let prompt = build_career_map_prompt(&request("12th"));
        assert!(prompt.contains("12th grade in the Commerce stream"));
        assert!(!prompt.contains("Suggest the best stream"));
    }

    #[test]
    fn test_college_prompt_offers_higher_studies() {
        let mut req = request("college");
        req.base_data.stream = None;
        let prompt = build_career_map_prompt(&req);
        assert!(prompt.contains("in college studying Mechanical Engineering"));
        assert!(prompt.contains("\"higher_studies\" section"));
    }

    #[test]
    fn test_answers_listed_in_question_order() {
        let prompt = build_career_map_prompt(&request("10th"));
        let first = prompt.find("- Question 1: Solve puzzles").unwrap();
        let second = prompt.find("- Question 2: Work in teams").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_placeholder_text_in_answers_kept_verbatim() {
        let mut req = request("12th");
        req.mcq_answers
            .insert("2".to_string(), "I like {instructions} and {answers}".to_string());
        req.base_data.stream = Some("{near_location}".to_string());
        let prompt = build_career_map_prompt(&req);
        assert!(prompt.contains("- Question 3: I like {instructions} and {answers}"));
        assert!(prompt.contains("in the {near_location} stream"));
        assert_eq!(prompt.matches("Do not suggest a stream").count(), 1);
    }

    #[test]
    fn test_location_woven_into_prompt() {
        let mut req = request("12th");
        req.location_data = Some(LocationData {
            city: Some("Pune".to_string()),
            state: Some("Maharashtra".to_string()),
            ..Default::default()
        });
        let prompt = build_career_map_prompt(&req);
        assert!(prompt.contains("The student is located in: Pune, Maharashtra."));
        assert!(prompt.contains(NEAR_LOCATION_SUFFIX));
    }

    #[test]
    fn test_location_without_place_names_is_ignored() {
        let mut req = request("12th");
        req.location_data = Some(LocationData {
            latitude: Some(18.5),
            longitude: Some(73.8),
            ..Default::default()
        });
        let prompt = build_career_map_prompt(&req);
        assert!(!prompt.contains("LOCATION CONTEXT"));
        assert!(!prompt.contains(NEAR_LOCATION_SUFFIX));
    }

    #[test]
    fn test_request_accepts_camel_case_body() {
        let req: CareerMapRequest = serde_json::from_str(
            r#"{"baseData": {"educationLevel": "10th"}, "mcqAnswers": {"0": "A"},
                "locationData": {"city": "Jaipur"}}"#,
        )
        .unwrap();
        assert_eq!(req.base_data.level(), EducationLevel::Tenth);
        assert_eq!(req.mcq_answers.len(), 1);
        assert!(req.user_id.is_none());
    }

    #[tokio::test]
    async fn test_generate_parses_prose_wrapped_map() {
        let llm = ScriptedGenerator::new(vec![Ok(career_map_reply())]);
        let map = generate_career_map(&llm, &request("10th")).await.unwrap();
        assert_eq!(map.career_options.len(), 1);
        assert_eq!(map.career_options[0].job_opportunities[0].market_trend, "up");
        assert_eq!(
            map.stream_suggestion.map(|s| s.stream).as_deref(),
            Some("Science")
        );
        assert!(map.higher_studies.is_none());
    }

    #[tokio::test]
    async fn test_generate_accepts_camel_case_keys() {
        let reply = r#"{"careerOptions": [{"title": "Chartered Accountant",
            "jobOpportunities": [{"title": "Auditor", "avgSalary": "₹7 LPA", "marketTrend": "stable"}]}],
            "businessOpportunities": {"description": "Consulting", "ideas": ["Tax practice"]}}"#;
        let llm = ScriptedGenerator::new(vec![Ok(reply.to_string())]);
        let map = generate_career_map(&llm, &request("college")).await.unwrap();
        assert_eq!(map.career_options[0].job_opportunities[0].avg_salary, "₹7 LPA");
        assert_eq!(
            map.business_opportunities.unwrap().ideas,
            vec!["Tax practice"]
        );
    }

    #[tokio::test]
    async fn test_generate_requires_career_options() {
        let llm = ScriptedGenerator::new(vec![Ok(r#"{"stream_suggestion": {"stream": "Arts"}}"#
            .to_string())]);
        let err = generate_career_map(&llm, &request("10th")).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[test]
    fn test_serialized_map_omits_absent_sections() {
        let map = CareerMap {
            stream_suggestion: None,
            career_options: vec![CareerOption {
                title: "Data Analyst".to_string(),
                description: String::new(),
                colleges: Vec::new(),
                job_opportunities: Vec::new(),
            }],
            higher_studies: None,
            business_opportunities: None,
        };
        let value = serde_json::to_value(&map).unwrap();
        assert!(value.get("stream_suggestion").is_none());
        assert!(value["career_options"][0].get("colleges").is_none());
    }

    #[tokio::test]
    async fn test_save_skipped_without_pool() {
        let map: CareerMap = serde_json::from_str(r#"{"career_options": []}"#).unwrap();
        // No pool configured: returns without touching the database.
        save_best_effort(None, Some(Uuid::new_v4()), &map).await;
    }
}
