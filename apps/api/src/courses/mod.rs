// Skill India course catalog and the career-title relevance matcher.
// The matcher is pure; handlers only adapt HTTP requests onto it.

pub mod catalog;
pub mod handlers;
pub mod mappings;
pub mod matcher;
