//! Career → course mapping table and the abbreviation synonyms used by the
//! fallback pass of the matcher.

use serde::{Deserialize, Serialize};

/// Associates a canonical career keyword with topical course keywords,
/// relevant sectors and a priority (1 = most important).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMapping {
    pub key: String,
    pub keywords: Vec<String>,
    pub sectors: Vec<String>,
    pub priority: u32,
}

impl CareerMapping {
    pub fn new(key: &str, keywords: &[&str], sectors: &[&str], priority: u32) -> Self {
        Self {
            key: key.to_lowercase(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            sectors: sectors.iter().map(|s| s.to_string()).collect(),
            priority,
        }
    }

    /// True when `token` overlaps the key or any keyword in either direction.
    pub fn is_activated_by(&self, token: &str) -> bool {
        self.key.contains(token)
            || token.contains(self.key.as_str())
            || self
                .keywords
                .iter()
                .any(|kw| kw.contains(token) || token.contains(kw.as_str()))
    }
}

/// Abbreviation with its expansions, e.g. `it` → information technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    pub abbreviation: String,
    pub expansions: Vec<String>,
}

impl Synonym {
    pub fn new(abbreviation: &str, expansions: &[&str]) -> Self {
        Self {
            abbreviation: abbreviation.to_lowercase(),
            expansions: expansions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }
}

pub fn career_mappings() -> Vec<CareerMapping> {
    vec![
        // Technology & Software
        CareerMapping::new(
            "software",
            &["python", "web", "mobile", "cybersecurity", "cloud", "machine learning", "data science", "programming"],
            &["Information Technology"],
            1,
        ),
        CareerMapping::new(
            "engineer",
            &["python", "web", "mobile", "cybersecurity", "cloud", "machine learning", "data science", "construction", "project management"],
            &["Information Technology", "Construction"],
            1,
        ),
        CareerMapping::new(
            "developer",
            &["python", "web", "mobile", "cybersecurity", "cloud", "programming"],
            &["Information Technology"],
            1,
        ),
        CareerMapping::new(
            "programmer",
            &["python", "web", "mobile", "programming"],
            &["Information Technology"],
            1,
        ),
        CareerMapping::new(
            "coder",
            &["python", "web", "mobile", "programming"],
            &["Information Technology"],
            1,
        ),
        // Data & Analytics
        CareerMapping::new(
            "data",
            &["python", "data science", "excel", "machine learning", "analytics"],
            &["Information Technology", "Business & Finance"],
            1,
        ),
        CareerMapping::new(
            "analyst",
            &["excel", "data science", "python", "project management", "analytics"],
            &["Information Technology", "Business & Finance"],
            1,
        ),
        CareerMapping::new(
            "scientist",
            &["python", "data science", "machine learning", "analytics"],
            &["Information Technology"],
            1,
        ),
        CareerMapping::new(
            "researcher",
            &["python", "data science", "analytics", "project management"],
            &["Information Technology", "Business & Finance"],
            2,
        ),
        // Management & Business
        CareerMapping::new(
            "manager",
            &["project management", "excel", "e-commerce", "leadership"],
            &["Management", "Business & Finance"],
            1,
        ),
        CareerMapping::new(
            "business",
            &["excel", "e-commerce", "project management", "accounting", "digital marketing"],
            &["Business & Finance", "Marketing & Communications"],
            1,
        ),
        CareerMapping::new(
            "entrepreneur",
            &["e-commerce", "digital marketing", "project management", "business"],
            &["Business & Finance", "Marketing & Communications"],
            1,
        ),
        CareerMapping::new(
            "consultant",
            &["project management", "excel", "business", "analytics"],
            &["Business & Finance", "Management"],
            2,
        ),
        // Finance & Accounting
        CareerMapping::new(
            "accounting",
            &["accounting", "excel", "finance", "tally"],
            &["Finance & Accounting"],
            1,
        ),
        CareerMapping::new(
            "finance",
            &["accounting", "excel", "finance", "tally"],
            &["Finance & Accounting"],
            1,
        ),
        CareerMapping::new(
            "banking",
            &["accounting", "excel", "finance"],
            &["Finance & Accounting"],
            1,
        ),
        CareerMapping::new(
            "auditor",
            &["accounting", "excel", "finance"],
            &["Finance & Accounting"],
            1,
        ),
        // Design & Creative
        CareerMapping::new(
            "designer",
            &["graphic design", "web", "multimedia", "creative"],
            &["Creative & Design", "Information Technology"],
            1,
        ),
        CareerMapping::new(
            "artist",
            &["graphic design", "multimedia", "creative"],
            &["Creative & Design"],
            1,
        ),
        CareerMapping::new(
            "creative",
            &["graphic design", "multimedia", "web"],
            &["Creative & Design"],
            1,
        ),
        // Marketing & Communications
        CareerMapping::new(
            "marketing",
            &["digital marketing", "e-commerce", "social media", "content"],
            &["Marketing & Communications"],
            1,
        ),
        CareerMapping::new(
            "advertising",
            &["digital marketing", "graphic design", "content"],
            &["Marketing & Communications", "Creative & Design"],
            1,
        ),
        CareerMapping::new(
            "communication",
            &["digital marketing", "content", "social media"],
            &["Marketing & Communications"],
            1,
        ),
        CareerMapping::new(
            "sales",
            &["retail", "customer service", "digital marketing"],
            &["Retail & Sales", "Marketing & Communications"],
            1,
        ),
        // Healthcare & Medical
        CareerMapping::new(
            "healthcare",
            &["healthcare", "medical", "patient care"],
            &["Healthcare"],
            1,
        ),
        CareerMapping::new(
            "medical",
            &["healthcare", "medical", "patient care"],
            &["Healthcare"],
            1,
        ),
        CareerMapping::new(
            "doctor",
            &["healthcare", "medical"],
            &["Healthcare"],
            1,
        ),
        CareerMapping::new(
            "nurse",
            &["healthcare", "medical", "patient care"],
            &["Healthcare"],
            1,
        ),
        CareerMapping::new(
            "therapist",
            &["healthcare", "medical"],
            &["Healthcare"],
            1,
        ),
        // Technical & Engineering
        CareerMapping::new(
            "technician",
            &["automotive", "construction", "technical"],
            &["Automotive", "Construction"],
            1,
        ),
        CareerMapping::new(
            "mechanic",
            &["automotive", "technical"],
            &["Automotive"],
            1,
        ),
        CareerMapping::new(
            "electrician",
            &["construction", "technical"],
            &["Construction"],
            1,
        ),
        CareerMapping::new(
            "plumber",
            &["construction", "technical"],
            &["Construction"],
            1,
        ),
        // Service Industries
        CareerMapping::new(
            "hospitality",
            &["hospitality", "hotel", "service"],
            &["Hospitality"],
            1,
        ),
        CareerMapping::new(
            "retail",
            &["retail", "sales", "customer service"],
            &["Retail & Sales"],
            1,
        ),
        CareerMapping::new(
            "tourism",
            &["hospitality", "service"],
            &["Hospitality"],
            1,
        ),
        CareerMapping::new(
            "chef",
            &["hospitality", "cooking"],
            &["Hospitality"],
            1,
        ),
        // Agriculture & Environment
        CareerMapping::new(
            "agriculture",
            &["agriculture", "farming", "environment"],
            &["Agriculture"],
            1,
        ),
        CareerMapping::new(
            "farming",
            &["agriculture", "farming"],
            &["Agriculture"],
            1,
        ),
        CareerMapping::new(
            "farmer",
            &["agriculture", "farming"],
            &["Agriculture"],
            1,
        ),
        CareerMapping::new(
            "environmental",
            &["agriculture", "environment"],
            &["Agriculture"],
            1,
        ),
        // Administrative & Support
        CareerMapping::new(
            "administrative",
            &["data entry", "office management", "excel"],
            &["Administrative"],
            2,
        ),
        CareerMapping::new(
            "assistant",
            &["data entry", "office management", "excel"],
            &["Administrative"],
            2,
        ),
        CareerMapping::new(
            "clerk",
            &["data entry", "office management", "excel"],
            &["Administrative"],
            2,
        ),
        CareerMapping::new(
            "receptionist",
            &["data entry", "office management", "customer service"],
            &["Administrative", "Retail & Sales"],
            2,
        ),
    ]
}

pub fn synonyms() -> Vec<Synonym> {
    vec![
        Synonym::new("tech", &["technology", "software", "programming", "computer"]),
        Synonym::new("it", &["information technology", "software", "computer"]),
        Synonym::new("cs", &["computer science", "software", "programming"]),
        Synonym::new("ce", &["computer engineering", "software", "hardware"]),
        Synonym::new("ee", &["electrical engineering", "electronics", "electrical"]),
        Synonym::new("me", &["mechanical engineering", "mechanical", "manufacturing"]),
        Synonym::new("civil", &["civil engineering", "construction", "infrastructure"]),
        Synonym::new("chem", &["chemistry", "chemical", "laboratory"]),
        Synonym::new("bio", &["biology", "life sciences", "biomedical"]),
        Synonym::new("med", &["medical", "medicine", "healthcare"]),
        Synonym::new("law", &["legal", "lawyer", "attorney"]),
        Synonym::new("edu", &["education", "teaching", "teacher"]),
        Synonym::new("art", &["arts", "creative", "design"]),
        Synonym::new("comm", &["communication", "media", "journalism"]),
        Synonym::new("econ", &["economics", "finance", "business"]),
        Synonym::new("psych", &["psychology", "mental health", "counseling"]),
        Synonym::new("soc", &["social work", "sociology", "community"]),
        Synonym::new("pol", &["political science", "politics", "government"]),
        Synonym::new("hist", &["history", "historical", "heritage"]),
        Synonym::new("geo", &["geography", "environmental", "geology"]),
        Synonym::new("math", &["mathematics", "statistics", "analytics"]),
        Synonym::new("phy", &["physics", "engineering", "science"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mapping_keys_unique() {
        let mappings = career_mappings();
        let keys: HashSet<&str> = mappings.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys.len(), mappings.len());
    }

    #[test]
    fn test_priorities_in_range() {
        assert!(career_mappings()
            .iter()
            .all(|m| (1..=3).contains(&m.priority)));
    }

    #[test]
    fn test_activation_key_contains_token() {
        let m = CareerMapping::new("developer", &["python"], &["Information Technology"], 1);
        assert!(m.is_activated_by("develop"));
    }

    #[test]
    fn test_activation_token_contains_key() {
        let m = CareerMapping::new("nurse", &["healthcare"], &["Healthcare"], 1);
        assert!(m.is_activated_by("nurses"));
    }

    #[test]
    fn test_activation_through_keyword() {
        let m = CareerMapping::new("scientist", &["machine learning"], &["Information Technology"], 1);
        assert!(m.is_activated_by("learning"));
        assert!(!m.is_activated_by("welding"));
    }

    #[test]
    fn test_synonym_abbreviations_unique() {
        let table = synonyms();
        let abbrevs: HashSet<&str> = table.iter().map(|s| s.abbreviation.as_str()).collect();
        assert_eq!(abbrevs.len(), table.len());
    }
}
