//! Learning resources for a single career, anchored on Skill India Digital courses.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::courses::catalog::CourseRecord;
use crate::courses::matcher::CourseMatcher;
use crate::guidance::prompts::RESOURCES_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{generate_json, TextGenerator};

pub const SKILL_INDIA_PLATFORM_URL: &str = "https://www.skillindiadigital.gov.in/";
const SKILL_INDIA_STUDIO_URL: &str = "https://studio.skillindiadigital.gov.in/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerResources {
    pub youtube: Vec<String>,
    pub links: Vec<String>,
    #[serde(alias = "skillIndiaDigital")]
    pub skill_india_digital: SkillIndiaDigital,
    pub exams: Vec<Exam>,
    #[serde(alias = "applicationWindow")]
    pub application_window: String,
    #[serde(alias = "preparationStrategy")]
    pub preparation_strategy: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillIndiaDigital {
    pub platform: String,
    pub courses: Vec<CourseRecord>,
    pub tools: Vec<Tool>,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tool {
    pub name: String,
    pub url: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exam {
    pub name: String,
    #[serde(alias = "lastExamDate")]
    pub last_exam_date: String,
    #[serde(alias = "expectedNextDate")]
    pub expected_next_date: String,
    #[serde(alias = "conductingBody")]
    pub conducting_body: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Difficulty {
    #[serde(alias = "acceptanceRate")]
    pub acceptance_rate: String,
    pub applicants: Option<u64>,
    pub seats: Option<u64>,
}

pub fn build_resources_prompt(career_title: &str, courses: &[CourseRecord]) -> String {
    // Serializing plain records cannot fail; an empty list still yields a usable prompt.
    let courses_json = serde_json::to_string_pretty(courses).unwrap_or_else(|_| "[]".to_string());
    fill_template(
        RESOURCES_PROMPT_TEMPLATE,
        &[
            ("{career_title}", career_title),
            ("{courses_json}", courses_json.as_str()),
            ("{json_only}", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Resources for `career_title`. Never fails: any LLM error degrades to
/// [`fallback_resources`] built from the matcher's courses.
pub async fn career_resources(
    llm: &dyn TextGenerator,
    matcher: &CourseMatcher,
    career_title: &str,
) -> CareerResources {
    let courses = matcher.search(career_title);
    let prompt = build_resources_prompt(career_title, &courses);

    match generate_json::<CareerResources>(llm, &prompt).await {
        Ok(mut resources) => {
            if resources.skill_india_digital.platform.is_empty() {
                resources.skill_india_digital.platform = SKILL_INDIA_PLATFORM_URL.to_string();
            }
            if resources.skill_india_digital.courses.is_empty() {
                resources.skill_india_digital.courses = courses;
            }
            info!(career_title, "career resources generated");
            resources
        }
        Err(e) => {
            warn!("Resource generation failed for {career_title:?}, serving fallback: {e}");
            fallback_resources(courses)
        }
    }
}

/// Static resource document carrying the given courses.
pub fn fallback_resources(courses: Vec<CourseRecord>) -> CareerResources {
    CareerResources {
        youtube: vec![
            "https://www.youtube.com/@SkillIndiaOfficial".to_string(),
            "https://www.youtube.com/@nptelhrd".to_string(),
        ],
        links: vec![
            "https://www.geeksforgeeks.org/".to_string(),
            "https://www.coursera.org/".to_string(),
            "https://swayam.gov.in/".to_string(),
        ],
        skill_india_digital: SkillIndiaDigital {
            platform: SKILL_INDIA_PLATFORM_URL.to_string(),
            courses,
            tools: vec![Tool {
                name: "Skill India Digital Studio".to_string(),
                url: SKILL_INDIA_STUDIO_URL.to_string(),
                description: "Build a digital profile and explore skilling pathways.".to_string(),
                features: vec![
                    "Digital skill profile".to_string(),
                    "Course recommendations".to_string(),
                ],
            }],
            benefits: vec![
                "Free access to industry-relevant courses".to_string(),
                "Self-paced learning with flexible schedules".to_string(),
                "Certification upon course completion".to_string(),
                "Industry-recognized credentials".to_string(),
            ],
        },
        exams: Vec::new(),
        application_window: "Most programs accept applications year-round; check each \
            course page for batch dates."
            .to_string(),
        preparation_strategy: "Start with a beginner Skill India Digital course to build \
            fundamentals, then practice with projects and move to intermediate courses."
            .to_string(),
        difficulty: Difficulty::default(),
    }
}
