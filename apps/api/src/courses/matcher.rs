//! Course Relevance Matcher — ranks the course catalog against a free-text career title.
//!
//! Pure and deterministic: every call reads the immutable tables handed to
//! [`CourseMatcher::new`] and allocates its own score board, so a single
//! matcher is shared across handlers behind an `Arc` without locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::courses::catalog::{skill_india_courses, CourseRecord, GENERIC_SECTORS};
use crate::courses::mappings::{career_mappings, synonyms, CareerMapping, Synonym};

/// Maximum number of courses returned by [`CourseMatcher::search`].
pub const DEFAULT_RESULT_LIMIT: usize = 6;

/// Tokens this short or shorter are ignored ("of", "it", "ai").
const MAX_IGNORED_TOKEN_LEN: usize = 2;

/// Suffixes stripped by the stem pass, in priority order. Only the first hit is removed.
const STEM_SUFFIXES: &[&str] = &["ing", "ed", "er", "ist", "ian"];

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Hand-tuned ranking weights.
///
/// The relative order title > sector bonus > description > sector keyword
/// > priority > synonym > stem is what matters; the defaults reproduce the
/// production ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub title_keyword: u32,
    pub description_keyword: u32,
    pub sector_keyword: u32,
    pub sector_bonus: u32,
    /// Priority bonus is `(priority_base - priority) * priority_multiplier`.
    pub priority_base: u32,
    pub priority_multiplier: u32,
    pub synonym_match: u32,
    pub stem_match: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_keyword: 10,
            description_keyword: 5,
            sector_keyword: 3,
            sector_bonus: 8,
            priority_base: 4,
            priority_multiplier: 2,
            synonym_match: 5,
            stem_match: 3,
        }
    }
}

impl ScoringWeights {
    fn priority_bonus(&self, priority: u32) -> u32 {
        self.priority_base.saturating_sub(priority) * self.priority_multiplier
    }
}

/// Optional filters for [`CourseMatcher::list_all`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilters {
    #[serde(default, alias = "careerTitle")]
    pub career_title: Option<String>,
    pub sector: Option<String>,
    pub level: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

/// Lowercased copies of the fields the scorer inspects.
#[derive(Debug)]
struct SearchableCourse {
    title: String,
    description: String,
    sector: String,
}

impl SearchableCourse {
    fn from_record(course: &CourseRecord) -> Self {
        Self {
            title: course.title.to_lowercase(),
            description: course.description.to_lowercase(),
            sector: course.sector.to_lowercase(),
        }
    }

    fn mentions(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.description.contains(needle) || self.sector.contains(needle)
    }
}

/// A course's best score so far, with its catalog position for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScoredCourse {
    index: usize,
    score: u32,
}

/// Best score per course title. Scores are maxed, never summed.
#[derive(Debug, Default)]
struct ScoreBoard<'a> {
    best: HashMap<&'a str, ScoredCourse>,
}

impl<'a> ScoreBoard<'a> {
    fn record(&mut self, title: &'a str, index: usize, score: u32) {
        if score == 0 {
            return;
        }
        let candidate = ScoredCourse { index, score };
        self.best
            .entry(title)
            .and_modify(|existing| {
                if score > existing.score {
                    *existing = candidate;
                }
            })
            .or_insert(candidate);
    }

    fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Catalog indices by descending score, catalog order on ties.
    fn ranked(self, limit: usize) -> Vec<usize> {
        let mut scored: Vec<ScoredCourse> = self.best.into_values().collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
        scored.into_iter().take(limit).map(|s| s.index).collect()
    }
}

pub struct CourseMatcher {
    courses: Vec<CourseRecord>,
    searchable: Vec<SearchableCourse>,
    mappings: Vec<CareerMapping>,
    synonyms: Vec<Synonym>,
    weights: ScoringWeights,
    limit: usize,
}

impl CourseMatcher {
    pub fn new(
        courses: Vec<CourseRecord>,
        mappings: Vec<CareerMapping>,
        synonyms: Vec<Synonym>,
        weights: ScoringWeights,
    ) -> Self {
        let searchable = courses.iter().map(SearchableCourse::from_record).collect();
        Self {
            courses,
            searchable,
            mappings,
            synonyms,
            weights,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Matcher over the built-in Skill India catalog and mapping tables.
    pub fn with_builtin_tables() -> Self {
        Self::new(
            skill_india_courses(),
            career_mappings(),
            synonyms(),
            ScoringWeights::default(),
        )
    }

    /// Lowers the result cap. Values are clamped to `1..=DEFAULT_RESULT_LIMIT`.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, DEFAULT_RESULT_LIMIT);
        self
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Top courses for a career title, most relevant first.
    ///
    /// Total: never fails, and never returns an empty list unless the
    /// catalog has no generic-sector courses at all.
    ///
    /// Tiers, each entered only if the previous one scored nothing:
    /// 1. direct career-mapping match
    /// 2. abbreviation synonyms + naive stems
    /// 3. generic IT / business / administrative list in catalog order
    pub fn search(&self, career_title: &str) -> Vec<CourseRecord> {
        let title_lower = career_title.to_lowercase();
        let tokens = tokenize(&title_lower);

        let mut board = ScoreBoard::default();
        self.score_mappings(&tokens, &mut board);

        if board.is_empty() {
            self.score_synonyms(&title_lower, &mut board);
            self.score_stems(&tokens, &mut board);
        }

        if board.is_empty() {
            debug!(career_title, "no course match, using generic fallback");
            return self.generic_fallback();
        }

        board
            .ranked(self.limit)
            .into_iter()
            .map(|index| self.courses[index].clone())
            .collect()
    }

    /// Full catalog (or the ranked `search` result when a career title is
    /// given) narrowed by case-insensitive sector / level substrings.
    /// Filtering keeps the incoming order.
    pub fn list_all(&self, filters: &CourseFilters) -> Vec<CourseRecord> {
        let base = match non_blank(filters.career_title.as_deref()) {
            Some(title) => self.search(title),
            None => self.courses.clone(),
        };

        let sector = non_blank(filters.sector.as_deref()).map(str::to_lowercase);
        let level = non_blank(filters.level.as_deref()).map(str::to_lowercase);

        base.into_iter()
            .filter(|c| contains_ci(&c.sector, sector.as_deref()))
            .filter(|c| contains_ci(&c.level, level.as_deref()))
            .collect()
    }

    fn score_mappings<'a>(&'a self, tokens: &[&str], board: &mut ScoreBoard<'a>) {
        for mapping in &self.mappings {
            if !tokens.iter().any(|t| mapping.is_activated_by(t)) {
                continue;
            }
            for (index, (course, searchable)) in
                self.courses.iter().zip(&self.searchable).enumerate()
            {
                let score = self.score_course(mapping, searchable);
                board.record(&course.title, index, score);
            }
        }
    }

    fn score_course(&self, mapping: &CareerMapping, course: &SearchableCourse) -> u32 {
        let w = &self.weights;
        let mut score = 0;

        for keyword in &mapping.keywords {
            if course.title.contains(keyword.as_str()) {
                score += w.title_keyword;
            }
            if course.description.contains(keyword.as_str()) {
                score += w.description_keyword;
            }
            if course.sector.contains(keyword.as_str()) {
                score += w.sector_keyword;
            }
        }

        if mapping
            .sectors
            .iter()
            .any(|s| course.sector.contains(&s.to_lowercase()))
        {
            score += w.sector_bonus;
        }

        score + w.priority_bonus(mapping.priority)
    }

    fn score_synonyms<'a>(&'a self, title_lower: &str, board: &mut ScoreBoard<'a>) {
        for synonym in &self.synonyms {
            if !title_lower.contains(synonym.abbreviation.as_str()) {
                continue;
            }
            for expansion in &synonym.expansions {
                self.record_mentions(expansion, self.weights.synonym_match, board);
            }
        }
    }

    fn score_stems<'a>(&'a self, tokens: &[&str], board: &mut ScoreBoard<'a>) {
        for stem in tokens.iter().copied().filter_map(stem) {
            self.record_mentions(stem, self.weights.stem_match, board);
        }
    }

    fn record_mentions<'a>(&'a self, needle: &str, score: u32, board: &mut ScoreBoard<'a>) {
        for (index, (course, searchable)) in self.courses.iter().zip(&self.searchable).enumerate() {
            if searchable.mentions(needle) {
                board.record(&course.title, index, score);
            }
        }
    }

    fn generic_fallback(&self) -> Vec<CourseRecord> {
        self.courses
            .iter()
            .filter(|c| GENERIC_SECTORS.contains(&c.sector.as_str()))
            .take(self.limit)
            .cloned()
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text helpers
// ────────────────────────────────────────────────────────────────────────────

fn tokenize(title_lower: &str) -> Vec<&str> {
    title_lower
        .split_whitespace()
        .filter(|t| t.chars().count() > MAX_IGNORED_TOKEN_LEN)
        .collect()
}

/// Strips the first matching suffix. Returns `None` when the stem is too short to be useful.
fn stem(token: &str) -> Option<&str> {
    let stemmed = STEM_SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token);
    (stemmed.chars().count() > MAX_IGNORED_TOKEN_LEN).then_some(stemmed)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn contains_ci(haystack: &str, needle_lower: Option<&str>) -> bool {
    needle_lower.map_or(true, |n| haystack.to_lowercase().contains(n))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> CourseMatcher {
        CourseMatcher::with_builtin_tables()
    }

    fn titles(courses: &[CourseRecord]) -> Vec<&str> {
        courses.iter().map(|c| c.title.as_str()).collect()
    }

    fn position(courses: &[CourseRecord], title: &str) -> Option<usize> {
        courses.iter().position(|c| c.title == title)
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("it and ai engineer"), vec!["and", "engineer"]);
    }

    #[test]
    fn test_tokenize_tolerates_extra_whitespace() {
        assert_eq!(tokenize("  data \t scientist "), vec!["data", "scientist"]);
    }

    #[test]
    fn test_stem_strips_first_matching_suffix() {
        assert_eq!(stem("welder"), Some("weld"));
        assert_eq!(stem("farming"), Some("farm"));
        assert_eq!(stem("pharmacist"), Some("pharmac"));
        assert_eq!(stem("librarian"), Some("librar"));
        assert_eq!(stem("trained"), Some("train"));
    }

    #[test]
    fn test_stem_rejects_short_results() {
        assert_eq!(stem("bing"), None);
        assert_eq!(stem("fed"), None);
    }

    #[test]
    fn test_priority_bonus_matches_default_table() {
        let w = ScoringWeights::default();
        assert_eq!(w.priority_bonus(1), 6);
        assert_eq!(w.priority_bonus(2), 4);
        assert_eq!(w.priority_bonus(3), 2);
        assert_eq!(w.priority_bonus(9), 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let m = matcher();
        for query in ["Software Engineer", "Nurse", "IT Support", "Xyzzy Quux"] {
            assert_eq!(m.search(query), m.search(query), "query {query}");
        }
    }

    #[test]
    fn test_search_output_bounded() {
        let m = matcher();
        for query in ["Software Engineer", "Welder", "", "Graphic Designer", "Chef", "a b"] {
            let results = m.search(query);
            assert!(!results.is_empty(), "query {query:?} returned nothing");
            assert!(results.len() <= DEFAULT_RESULT_LIMIT);
        }
    }

    #[test]
    fn test_title_keyword_outranks_sector_only_match() {
        let results = matcher().search("Python Developer");
        assert_eq!(results[0].title, "Python Programming Fundamentals");
    }

    #[test]
    fn test_data_scientist_ranks_data_courses() {
        let results = matcher().search("Data Scientist");
        let ds = position(&results, "Data Science and Analytics").expect("data science missing");
        let ml = position(&results, "Machine Learning and AI Basics").expect("ml missing");
        if let Some(welding) = position(&results, "Welding and Fabrication Technology") {
            assert!(ds < welding && ml < welding);
        }
    }

    #[test]
    fn test_civil_engineer_prefers_construction() {
        let results = matcher().search("Civil Engineer");
        assert_eq!(results[0].title, "Construction and Civil Engineering");
    }

    #[test]
    fn test_nonsense_query_returns_generic_fallback() {
        let results = matcher().search("Xyzzy Quux");
        assert_eq!(
            titles(&results),
            vec![
                "Python Programming Fundamentals",
                "Computer Application Certificate",
                "Advanced Excel and Data Analysis",
                "Data Entry and Office Management",
                "Web Development with HTML, CSS & JavaScript",
                "Mobile App Development",
            ]
        );
        assert!(results
            .iter()
            .all(|c| GENERIC_SECTORS.contains(&c.sector.as_str())));
    }

    #[test]
    fn test_empty_query_returns_generic_fallback() {
        let m = matcher();
        assert_eq!(m.search(""), m.search("Xyzzy Quux"));
        assert_eq!(m.search("   "), m.search("Xyzzy Quux"));
    }

    #[test]
    fn test_synonym_pass_expands_abbreviation() {
        // "it" is too short to be a token but still triggers the synonym table.
        let results = matcher().search("IT Support");
        assert_eq!(
            titles(&results),
            vec![
                "Python Programming Fundamentals",
                "Computer Application Certificate",
                "Financial Accounting and Tally",
                "Web Development with HTML, CSS & JavaScript",
                "Mobile App Development",
                "Cybersecurity Fundamentals",
            ]
        );
    }

    #[test]
    fn test_stem_pass_does_not_pad_results() {
        let results = matcher().search("Welder");
        assert_eq!(titles(&results), vec!["Welding and Fabrication Technology"]);
    }

    #[test]
    fn test_score_is_max_not_sum_across_mappings() {
        let courses = vec![CourseRecord::new(
            "Python Basics",
            "python",
            "Information Technology",
            "1 month",
            "Beginner",
        )];
        let mappings = vec![
            CareerMapping::new("coder", &["python"], &[], 3),
            CareerMapping::new("programmer", &["python"], &[], 3),
        ];
        let m = CourseMatcher::new(courses, mappings, vec![], ScoringWeights::default());
        let mut board = ScoreBoard::default();
        m.score_mappings(&["python"], &mut board);
        // 10 (title) + 5 (description) + 2 (priority 3), not doubled.
        assert_eq!(board.best["Python Basics"].score, 17);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let courses: Vec<CourseRecord> = ["Zeta Welding", "Alpha Welding", "Mid Welding"]
            .into_iter()
            .map(|t| CourseRecord::new(t, "welding course", "Construction", "1 month", "Beginner"))
            .collect();
        let mappings = vec![CareerMapping::new("welder", &["welding"], &["Construction"], 1)];
        let m = CourseMatcher::new(courses, mappings, vec![], ScoringWeights::default());
        assert_eq!(
            titles(&m.search("welder")),
            vec!["Zeta Welding", "Alpha Welding", "Mid Welding"]
        );
    }

    #[test]
    fn test_higher_score_beats_catalog_order() {
        let courses = vec![
            CourseRecord::new("Office Basics", "general", "Administrative", "1 month", "Beginner"),
            CourseRecord::new("Cloud Ops", "cloud", "Information Technology", "1 month", "Beginner"),
        ];
        let mappings = vec![CareerMapping::new("devops", &["cloud"], &["Information Technology"], 1)];
        let m = CourseMatcher::new(courses, mappings, vec![], ScoringWeights::default());
        assert_eq!(titles(&m.search("devops")), vec!["Cloud Ops", "Office Basics"]);
    }

    #[test]
    fn test_limit_is_configurable() {
        let m = matcher().with_limit(2);
        assert_eq!(m.search("Software Engineer").len(), 2);
        assert_eq!(m.search("Xyzzy Quux").len(), 2);
    }

    #[test]
    fn test_limit_cannot_exceed_default() {
        let m = matcher().with_limit(10);
        assert_eq!(m.search("Software Engineer").len(), DEFAULT_RESULT_LIMIT);
        assert_eq!(matcher().with_limit(0).search("Welder").len(), 1);
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let m = CourseMatcher::new(vec![], career_mappings(), synonyms(), ScoringWeights::default());
        assert!(m.search("Software Engineer").is_empty());
    }

    #[test]
    fn test_list_all_without_filters_returns_catalog() {
        let m = matcher();
        assert_eq!(m.list_all(&CourseFilters::default()), m.courses().to_vec());
    }

    #[test]
    fn test_list_all_sector_filter_case_insensitive() {
        let filters = CourseFilters {
            sector: Some("healthcare".to_string()),
            ..Default::default()
        };
        let results = matcher().list_all(&filters);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|c| c.sector == "Healthcare"));
    }

    #[test]
    fn test_list_all_level_filter_substring() {
        let filters = CourseFilters {
            level: Some("ADVANCED".to_string()),
            ..Default::default()
        };
        let results = matcher().list_all(&filters);
        assert!(!results.is_empty());
        assert!(results.iter().all(|c| c.level.contains("Advanced")));
    }

    #[test]
    fn test_list_all_filters_ranked_search_in_order() {
        let m = matcher();
        let filters = CourseFilters {
            career_title: Some("Software Engineer".to_string()),
            sector: Some("information".to_string()),
            level: None,
        };
        let ranked = m.search("Software Engineer");
        let expected: Vec<CourseRecord> = ranked
            .into_iter()
            .filter(|c| c.sector == "Information Technology")
            .collect();
        let results = m.list_all(&filters);
        assert_eq!(results, expected);
        assert!(!results.iter().any(|c| c.title == "Construction and Civil Engineering"));
    }

    #[test]
    fn test_filters_accept_camel_case_title() {
        let filters: CourseFilters =
            serde_json::from_str(r#"{"careerTitle": "Nurse", "sector": "Healthcare"}"#).unwrap();
        assert_eq!(filters.career_title.as_deref(), Some("Nurse"));
        let results = matcher().list_all(&filters);
        assert!(!results.is_empty());
        assert!(results.len() < 55);
        assert!(results.iter().all(|c| c.sector == "Healthcare"));
    }

    #[test]
    fn test_list_all_blank_title_is_ignored() {
        let m = matcher();
        let filters = CourseFilters {
            career_title: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(m.list_all(&filters).len(), m.courses().len());
    }
}
