// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every prompt whose reply is parsed as JSON.
///
/// Gemini has no separate system slot in the single-prompt call, so the
/// instruction travels inside the prompt body.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    IMPORTANT: Respond with ONLY a valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona used as the opening exchange of every counselor chat.
pub const COUNSELOR_PERSONA: &str = "You are 'Career Disha,' a friendly, expert AI career \
    counselor for students in India. Answer plainly and briefly. Use simple words. \
    Keep replies to 2-3 short sentences. Do not use lists, headings, bold text, or \
    introductions like 'Here are' or 'Sure'. Go straight to the answer. \
    If needed, give a single, clear next step.";

/// Joins the non-empty parts with ", ". Returns `None` when nothing remains.
pub fn join_present(parts: &[Option<&str>]) -> Option<String> {
    let present: Vec<&str> = parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    (!present.is_empty()).then(|| present.join(", "))
}

/// Fills `{placeholder}` slots in one left-to-right pass.
///
/// Substituted text is never rescanned, so a value that itself contains a
/// placeholder (user input, for instance) is inserted verbatim. Braces that
/// do not start a known placeholder are copied through unchanged.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(slot, _)| tail.starts_with(*slot)) {
            Some((slot, value)) => {
                out.push_str(value);
                rest = &tail[slot.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
