//! Prompt Builder — deterministic rendering of assessment prompts from
//! survey answers and résumé text. Pure string construction; the same input
//! always produces byte-identical output (answers are rendered in catalog
//! order, never map-iteration order).

use std::collections::HashMap;
use std::fmt::Write;

use crate::assessment::catalog::{reduced_catalog, Question, FULL_CATALOG};
use crate::assessment::prompts::{
    NOT_ANSWERED, PERSONA_PREAMBLE, RESUME_END_MARKER, RESUME_SCHEMA_BLOCK, RESUME_START_MARKER,
    SURVEY_SCHEMA_BLOCK,
};
use crate::assessment::AssessmentError;

/// Question-id -> selected-option map, as flattened out of the request body.
pub type AnswerMap = HashMap<String, String>;

/// Request-body key that carries résumé text. Never a survey answer; stripped
/// defensively wherever an answer map is rendered.
pub const RESUME_TEXT_KEY: &str = "resumeText";

/// Builds the prompt for the full-survey path (no résumé).
///
/// Renders the complete question catalog with every option so the model has
/// the range of possible responses as calibration context, then the user's
/// actual answers paired with their question text. Scores with
/// `cookedPercentage`.
pub fn build_full_survey_prompt(answers: &AnswerMap) -> Result<String, AssessmentError> {
    if answered_count(answers) == 0 {
        return Err(AssessmentError::InputValidation(
            "survey submission contains no answers".to_string(),
        ));
    }

    let mut prompt = String::new();
    prompt.push_str(PERSONA_PREAMBLE);
    prompt.push_str("\n\nFor calibration, these are all survey questions and their possible options:\n");
    push_catalog_block(&mut prompt, FULL_CATALOG.iter());

    prompt.push_str("\nSurvey Responses:\n");
    for q in FULL_CATALOG {
        // Catalog-order iteration also skips any stray resumeText key.
        if let Some(answer) = answers.get(q.id) {
            writeln!(prompt, "{}: {}", q.text, answer).expect("writing to String cannot fail");
        }
    }

    prompt.push('\n');
    prompt.push_str(SURVEY_SCHEMA_BLOCK);
    Ok(prompt)
}

/// Builds the prompt for the combined survey + résumé path.
///
/// The résumé is embedded verbatim between literal delimiters. Every
/// reduced-catalog question is rendered, with `Not Answered` standing in for
/// skipped questions so the model sees the same question set every time.
/// Answers outside the reduced catalog are ignored. Scores with
/// `cookedPercentage`.
pub fn build_combined_prompt(
    answers: &AnswerMap,
    resume_text: &str,
) -> Result<String, AssessmentError> {
    require_resume_text(resume_text)?;

    let mut prompt = String::new();
    prompt.push_str(PERSONA_PREAMBLE);
    push_resume_block(&mut prompt, resume_text);

    prompt.push_str("\nSurvey Responses:\n");
    for q in reduced_catalog() {
        let answer = answers.get(q.id).map(String::as_str).unwrap_or(NOT_ANSWERED);
        writeln!(prompt, "{}: {}", q.text, answer).expect("writing to String cannot fail");
    }

    prompt.push('\n');
    prompt.push_str(SURVEY_SCHEMA_BLOCK);
    Ok(prompt)
}

/// Builds the prompt for the résumé-only path. No survey section; scores with
/// `confidenceScore` so downstream code can distinguish the source.
pub fn build_resume_only_prompt(resume_text: &str) -> Result<String, AssessmentError> {
    require_resume_text(resume_text)?;

    let mut prompt = String::new();
    prompt.push_str(PERSONA_PREAMBLE);
    push_resume_block(&mut prompt, resume_text);

    prompt.push('\n');
    prompt.push_str(RESUME_SCHEMA_BLOCK);
    Ok(prompt)
}

fn require_resume_text(resume_text: &str) -> Result<(), AssessmentError> {
    if resume_text.trim().is_empty() {
        return Err(AssessmentError::InputValidation(
            "resume text is empty".to_string(),
        ));
    }
    Ok(())
}

fn push_resume_block(prompt: &mut String, resume_text: &str) {
    prompt.push_str("\n\nResume Text:\n");
    prompt.push_str(RESUME_START_MARKER);
    prompt.push('\n');
    // Verbatim: no trimming, truncation, or escaping.
    prompt.push_str(resume_text);
    prompt.push('\n');
    prompt.push_str(RESUME_END_MARKER);
    prompt.push('\n');
}

fn push_catalog_block<'a>(prompt: &mut String, questions: impl Iterator<Item = &'a Question>) {
    for q in questions {
        writeln!(prompt, "- {}\n  Options: {}", q.text, q.options.join(", "))
            .expect("writing to String cannot fail");
    }
}

fn answered_count(answers: &AnswerMap) -> usize {
    answers.keys().filter(|k| *k != RESUME_TEXT_KEY).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::{question_by_id, REDUCED_IDS};

    fn full_answers() -> AnswerMap {
        FULL_CATALOG
            .iter()
            .map(|q| (q.id.to_string(), q.options[0].to_string()))
            .collect()
    }

    #[test]
    fn test_full_prompt_contains_every_catalog_question() {
        let prompt = build_full_survey_prompt(&full_answers()).unwrap();
        for q in FULL_CATALOG {
            assert!(prompt.contains(q.text), "missing question text: {}", q.text);
        }
    }

    #[test]
    fn test_full_prompt_contains_all_options_for_calibration() {
        let prompt = build_full_survey_prompt(&full_answers()).unwrap();
        for q in FULL_CATALOG {
            for opt in q.options {
                assert!(prompt.contains(opt), "missing option: {opt}");
            }
        }
    }

    #[test]
    fn test_full_prompt_pairs_answers_with_question_text() {
        let mut answers = AnswerMap::new();
        answers.insert("leetcode".to_string(), "201-500".to_string());
        let prompt = build_full_survey_prompt(&answers).unwrap();
        let q = question_by_id("leetcode").unwrap();
        assert!(prompt.contains(&format!("{}: 201-500", q.text)));
    }

    #[test]
    fn test_full_prompt_requests_cooked_percentage_field() {
        let prompt = build_full_survey_prompt(&full_answers()).unwrap();
        assert!(prompt.contains("\"cookedPercentage\""));
        assert!(!prompt.contains("\"confidenceScore\""));
    }

    #[test]
    fn test_full_prompt_strips_resume_text_key() {
        let mut answers = full_answers();
        answers.insert(
            RESUME_TEXT_KEY.to_string(),
            "SHOULD NOT APPEAR IN PROMPT".to_string(),
        );
        let prompt = build_full_survey_prompt(&answers).unwrap();
        assert!(!prompt.contains("SHOULD NOT APPEAR IN PROMPT"));
    }

    #[test]
    fn test_full_prompt_rejects_empty_submission() {
        let mut answers = AnswerMap::new();
        answers.insert(RESUME_TEXT_KEY.to_string(), "only a resume".to_string());
        let err = build_full_survey_prompt(&answers).unwrap_err();
        assert!(matches!(err, AssessmentError::InputValidation(_)));
    }

    #[test]
    fn test_full_prompt_is_deterministic() {
        let answers = full_answers();
        let a = build_full_survey_prompt(&answers).unwrap();
        let b = build_full_survey_prompt(&answers).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_combined_prompt_renders_not_answered_for_missing_reduced_ids() {
        let mut answers = AnswerMap::new();
        answers.insert("jobType".to_string(), "Full-time".to_string());
        let prompt = build_combined_prompt(&answers, "a resume").unwrap();

        for id in REDUCED_IDS.iter().filter(|id| **id != "jobType") {
            let q = question_by_id(id).unwrap();
            assert!(
                prompt.contains(&format!("{}: Not Answered", q.text)),
                "missing sentinel for {id}"
            );
        }
        assert!(prompt.contains("What type of job are you looking for?: Full-time"));
    }

    #[test]
    fn test_combined_prompt_ignores_non_reduced_answers() {
        let mut answers = AnswerMap::new();
        answers.insert("gpa".to_string(), "3.6-4.0".to_string());
        let prompt = build_combined_prompt(&answers, "a resume").unwrap();
        assert!(!prompt.contains("What is your GPA?"));
    }

    #[test]
    fn test_combined_prompt_rejects_blank_resume() {
        let err = build_combined_prompt(&AnswerMap::new(), "   \n\t ").unwrap_err();
        assert!(matches!(err, AssessmentError::InputValidation(_)));
    }

    #[test]
    fn test_resume_only_prompt_embeds_resume_verbatim_between_markers() {
        let resume = "Jane Doe\n  indented line\nspecial chars: {} \"quotes\" 100%";
        let prompt = build_resume_only_prompt(resume).unwrap();

        let start = prompt.find(RESUME_START_MARKER).expect("start marker");
        let end = prompt.find(RESUME_END_MARKER).expect("end marker");
        assert!(start < end);

        let between = &prompt[start + RESUME_START_MARKER.len()..end];
        assert_eq!(between, format!("\n{resume}\n"));
    }

    #[test]
    fn test_resume_only_prompt_requests_confidence_score_field() {
        let prompt = build_resume_only_prompt("a resume").unwrap();
        assert!(prompt.contains("\"confidenceScore\""));
        assert!(!prompt.contains("\"cookedPercentage\""));
    }

    #[test]
    fn test_resume_only_prompt_has_no_survey_section() {
        let prompt = build_resume_only_prompt("a resume").unwrap();
        assert!(!prompt.contains("Survey Responses:"));
    }

    #[test]
    fn test_resume_only_prompt_rejects_empty_resume() {
        let err = build_resume_only_prompt("").unwrap_err();
        assert!(matches!(err, AssessmentError::InputValidation(_)));
    }
}
