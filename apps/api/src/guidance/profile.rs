//! Student profile shapes shared by the questionnaire and career-map endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    /// Finished class 10; still choosing a stream.
    Tenth,
    /// In class 12 with a stream already chosen.
    Twelfth,
    /// Anything else is treated as in college.
    College,
}

/// Answers from the base questionnaire. `q1`..`q7` are accepted as aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    #[serde(alias = "educationLevel")]
    pub education_level: String,
    pub stream: Option<String>,
    #[serde(alias = "fieldOfStudy")]
    pub field_of_study: Option<String>,
    #[serde(alias = "q1")]
    pub enjoys_subject: Option<String>,
    #[serde(alias = "q2")]
    pub challenging_subject: Option<String>,
    #[serde(alias = "q3")]
    pub hobbies: Option<String>,
    #[serde(alias = "q4")]
    pub work_preference: Option<String>,
    #[serde(alias = "q5")]
    pub work_environment: Option<String>,
    #[serde(alias = "q6")]
    pub interest_type: Option<String>,
    #[serde(alias = "q7")]
    pub long_term_goal: Option<String>,
}

impl StudentProfile {
    pub fn level(&self) -> EducationLevel {
        match self.education_level.trim() {
            "10th" => EducationLevel::Tenth,
            "12th" => EducationLevel::Twelfth,
            _ => EducationLevel::College,
        }
    }

    /// Stream for school students, field of study for college students.
    pub fn discipline(&self) -> Option<&str> {
        self.stream
            .as_deref()
            .or(self.field_of_study.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// `(label, answer)` pairs for the free-form interest questions, skipping blanks.
    pub fn interests(&self) -> Vec<(&'static str, &str)> {
        [
            ("Enjoys Subject", &self.enjoys_subject),
            ("Challenging Subject", &self.challenging_subject),
            ("Hobbies", &self.hobbies),
            ("Work Preference", &self.work_preference),
            ("Work Environment", &self.work_environment),
            ("Interest Type", &self.interest_type),
            ("Long-term Goal", &self.long_term_goal),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// Where the student is, as resolved by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationData {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// MCQ answers keyed by zero-based question index.
///
/// Keys arrive as JSON object keys (strings). Numeric keys sort numerically;
/// anything else sorts after them lexically.
pub fn ordered_answers(answers: &BTreeMap<String, String>) -> Vec<(String, &str)> {
    let mut numbered: Vec<(Option<u32>, &String, &String)> = answers
        .iter()
        .map(|(k, v)| (k.trim().parse::<u32>().ok(), k, v))
        .collect();
    numbered.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    });

    numbered
        .into_iter()
        .map(|(n, k, v)| {
            let label = match n {
                Some(i) => format!("Question {}", i + 1),
                None => k.clone(),
            };
            (label, v.as_str())
        })
        .collect()
}
