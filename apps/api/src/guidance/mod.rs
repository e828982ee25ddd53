// Student guidance: questionnaire, career map, resources and counselor chat.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod career_map;
pub mod chat;
pub mod handlers;
pub mod mcq;
pub mod profile;
pub mod prompts;
pub mod resources;

#[cfg(test)]
pub(crate) mod test_support;
