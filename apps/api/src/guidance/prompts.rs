// All LLM prompt constants for the Guidance module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// MCQ generation prompt template.
/// Replace: {profile}, {question_count}, {json_only}
pub const MCQ_PROMPT_TEMPLATE: &str = r#"You are an expert career counselor for students in the Indian education system.
Based on the following student profile, generate EXACTLY {question_count} multiple-choice questions (MCQs) to gauge their interests, aptitude, and personality for career guidance.

Student Profile:
{profile}

Generate EXACTLY {question_count} questions that cover:
1. Problem-solving approaches and thinking styles
2. Work environment preferences
3. Communication and leadership styles
4. Learning preferences and study habits
5. Career values and motivations
6. Interest in different industries and fields
7. Risk tolerance and decision-making style

CRITICAL: You must generate EXACTLY {question_count} questions. Each question must have exactly 4 options.

{json_only}
Format:
{ "questions": [ { "question": "...", "options": ["...", "...", "...", "..."] } ] }"#;

/// Career-map prompt template.
/// Replace: {profile}, {location_context}, {answers}, {instructions}, {json_only}
pub const CAREER_MAP_PROMPT_TEMPLATE: &str = r#"You are a premier career counselor for the Indian education system. Your task is to generate a personalized career map.

STUDENT PROFILE:
{profile}
{location_context}

MCQ QUIZ ANSWERS:
{answers}

INSTRUCTIONS:
Based on the complete profile, generate the career map following these rules:
{instructions}

{json_only}

JSON schema:
{
  "stream_suggestion": { "stream": "Science", "reason": "..." },
  "career_options": [
    {
      "title": "Career Title",
      "description": "A brief 2-3 sentence description of this career.",
      "colleges": ["College 1", "College 2"],
      "job_opportunities": [
        { "title": "Job Title", "avg_salary": "₹X LPA", "market_trend": "up" }
      ]
    }
  ],
  "higher_studies": { "description": "...", "colleges": ["PG College 1"] },
  "business_opportunities": { "description": "...", "ideas": ["Idea 1"] }
}

Only include optional keys if relevant. "career_options" must always be present.
Only include "stream_suggestion" for 10th grade students. Only include "colleges" inside career options for 10th and 12th grade students."#;

/// Rules for a student who has just finished class 10.
/// Replace: {near_location}
pub const TENTH_INSTRUCTIONS: &str = "\
1. Suggest the best stream (Science, Commerce, or Arts/Humanities) and provide a concise reason.
2. Based on the suggested stream and MCQ answers, provide 3 highly targeted career options that match the student's specific interests and preferences.
3. For each career option, list 10 suitable colleges in India{near_location}.
4. For each career option, list 10 potential job opportunities, each with an \"avg_salary\" (in INR) and a \"market_trend\" ('up', 'down', or 'stable').";

/// Rules for a class 12 student.
/// Replace: {stream}, {near_location}
pub const TWELFTH_INSTRUCTIONS: &str = "\
1. The student is in 12th grade in the {stream} stream. Do not suggest a stream.
2. Based on MCQ answers, provide 3 highly targeted career options that align with their specific interests, skills, and preferences.
3. For each career option, list 10 suitable colleges in India{near_location}.
4. For each career option, list 10 potential job opportunities, each with an \"avg_salary\" (in INR) and a \"market_trend\" ('up', 'down', or 'stable').";

/// Rules for a college student.
/// Replace: {field_of_study}, {near_location}
pub const COLLEGE_INSTRUCTIONS: &str = "\
1. The student is in college studying {field_of_study}. Do not suggest streams or undergraduate colleges.
2. Based on MCQ answers, provide 3 highly targeted career paths or advanced job roles that match their specific interests and career goals.
3. For each path, list 10 specific job opportunities, each with an \"avg_salary\" (in INR) and a \"market_trend\" ('up', 'down', or 'stable').
4. If answers suggest interest in further studies, include a \"higher_studies\" section with 5 postgraduate (PG) colleges or courses{near_location}.
5. If answers suggest an interest in entrepreneurship, include a \"business_opportunities\" section with 3 relevant business ideas.";

pub const NEAR_LOCATION_SUFFIX: &str = " prioritizing those near the student's location";

/// Replace: {location}
pub const LOCATION_CONTEXT_TEMPLATE: &str = "
LOCATION CONTEXT:
The student is located in: {location}. When recommending colleges, prioritize institutions that are:
1. Nearby/accessible from their location (within 200-300 km radius)
2. In the same state/region for easier access and lower costs
3. Well-connected by transport from their location
4. Reputable institutions in their region

If no good colleges exist nearby, then suggest the best national options.";

/// Career resources prompt template.
/// Replace: {career_title}, {courses_json}, {json_only}
pub const RESOURCES_PROMPT_TEMPLATE: &str = r#"For the career path of "{career_title}" in India, provide structured and accurate resources for a student.

- Stick EXACTLY to the schema below.
- Use realistic recent data where possible. If exact figures are not available, provide reasonable estimates and clearly label them.
- PRIORITIZE Skill India Digital (https://www.skillindiadigital.gov.in/home) as the primary resource platform.

AVAILABLE SKILL INDIA COURSES FOR THIS CAREER:
{courses_json}

Use these specific courses in your response and keep their exact URLs.

SCHEMA:
{
  "youtube": ["https://youtube.com/watch?v=..."],
  "links": ["https://www.geeksforgeeks.org/..."],
  "skill_india_digital": {
    "platform": "https://www.skillindiadigital.gov.in/",
    "courses": [
      { "title": "...", "url": "...", "description": "...", "sector": "...", "duration": "...", "level": "Beginner | Intermediate | Advanced" }
    ],
    "tools": [
      { "name": "...", "url": "https://studio.skillindiadigital.gov.in/", "description": "...", "features": ["..."] }
    ],
    "benefits": ["Free access to industry-relevant courses"]
  },
  "exams": [
    { "name": "...", "last_exam_date": "Month YYYY", "expected_next_date": "Month YYYY (estimated)", "conducting_body": "...", "level": "National | State | University" }
  ],
  "application_window": "When applications usually open and close.",
  "preparation_strategy": "A short 2-3 sentence strategy for preparation.",
  "difficulty": { "acceptance_rate": "e.g. 2% selected", "applicants": 1000000, "seats": 20000 }
}

RULES:
- Select the most relevant 4-6 courses from the list above.
- Provide at least 2 YouTube links and 2-4 article links from real educational platforms.
- Include 2-3 Skill India Digital tools useful for this career.
- For each exam, include the last known date and an estimate for the next.
- Difficulty must reflect actual competitiveness.

{json_only}"#;

/// Opening user turn that precedes the persona reply in every chat.
pub const CHAT_GREETING: &str = "Hello, who are you?";
