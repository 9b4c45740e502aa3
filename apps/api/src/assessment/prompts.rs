// All LLM prompt fragments for the assessment pipeline. The builder
// functions in `prompt_builder` assemble these with the rendered survey
// answers and résumé text.

/// Persona preamble shared by every assessment prompt, including the
/// definition of the "cooked" classification the model is asked to make.
pub const PERSONA_PREAMBLE: &str = "\
As a career advisor, analyze the following submission and provide a detailed \
assessment of whether the candidate is \"cooked\" or not for their job search. \
\"Cooked\" is slang for underprepared: a cooked candidate lacks the preparation, \
experience, or job search strategy to succeed. The candidate is pursuing a \
computer science related role. Address the candidate directly in your response.";

/// Output-schema instruction for the survey paths. The score field is named
/// `cookedPercentage` so downstream code can tell survey-driven results apart
/// from résumé-only results.
pub const SURVEY_SCHEMA_BLOCK: &str = r#"Please provide:
1. An overall assessment (are they cooked?). Make this very brief (ie. 2 sentences).
2. Key strengths (3 bullet points)
3. Areas for improvement (3 bullet points)
4. Specific recommendations (3 bullet points)
5. A cooked percentage (0-100), where 0 means fully ready and 100 means fully unprepared. A score of 0 is allowed. Do not soften the assessment.

Format the response strictly as JSON with the following structure:
{
  "isCooked": boolean,
  "overallAssessment": "string",
  "strengths": ["string"],
  "areasForImprovement": ["string"],
  "recommendations": ["string"],
  "cookedPercentage": number
}"#;

/// Output-schema instruction for the résumé-only path. Scores with
/// `confidenceScore` (0 = no confidence, 100 = fully prepared); the extractor
/// normalizes it onto the canonical cooked polarity.
pub const RESUME_SCHEMA_BLOCK: &str = r#"Please provide:
1. An overall assessment (are they cooked based on the resume?). Make this very brief (ie. 2 sentences).
2. Key strengths evident from the resume (3 bullet points)
3. Areas for improvement in the resume (3 bullet points)
4. Specific recommendations for enhancing the resume (3 bullet points)
5. A confidence score (0-100) representing how well-prepared the candidate appears based only on this resume.

Format the response strictly as JSON with the following structure:
{
  "isCooked": boolean,
  "overallAssessment": "string",
  "strengths": ["string"],
  "areasForImprovement": ["string"],
  "recommendations": ["string"],
  "confidenceScore": number
}"#;

/// Literal delimiters around embedded résumé text. The text between them is
/// passed through verbatim.
pub const RESUME_START_MARKER: &str = "--- START RESUME ---";
pub const RESUME_END_MARKER: &str = "--- END RESUME ---";

/// Sentinel rendered for reduced-catalog questions the user skipped, so the
/// model always sees the complete reduced question set.
pub const NOT_ANSWERED: &str = "Not Answered";
