//! Pipeline composition: Prompt Builder -> Model Invocation -> Result
//! Extractor. Stateless per call; the generation call is the only suspension
//! point and is awaited to completion before extraction runs.

use crate::assessment::extractor::{extract_assessment, AssessmentResult, ScoreField};
use crate::assessment::prompt_builder::{
    build_combined_prompt, build_full_survey_prompt, build_resume_only_prompt, AnswerMap,
};
use crate::assessment::AssessmentError;
use crate::llm_client::TextGenerator;

/// Assesses a full-catalog survey submission (no résumé).
pub async fn analyze_full_survey(
    answers: &AnswerMap,
    llm: &dyn TextGenerator,
    model: &str,
) -> Result<AssessmentResult, AssessmentError> {
    let prompt = build_full_survey_prompt(answers)?;
    let raw = llm.generate(&prompt, model).await?;
    extract_assessment(&raw, ScoreField::CookedPercentage)
}

/// Assesses a reduced survey submission together with résumé text.
pub async fn analyze_survey_and_resume(
    answers: &AnswerMap,
    resume_text: &str,
    llm: &dyn TextGenerator,
    model: &str,
) -> Result<AssessmentResult, AssessmentError> {
    let prompt = build_combined_prompt(answers, resume_text)?;
    let raw = llm.generate(&prompt, model).await?;
    extract_assessment(&raw, ScoreField::CookedPercentage)
}

/// Assesses résumé text alone. The model scores with `confidenceScore`;
/// the extractor normalizes it onto the canonical cooked polarity.
pub async fn analyze_resume_text(
    resume_text: &str,
    llm: &dyn TextGenerator,
    model: &str,
) -> Result<AssessmentResult, AssessmentError> {
    let prompt = build_resume_only_prompt(resume_text)?;
    let raw = llm.generate(&prompt, model).await?;
    extract_assessment(&raw, ScoreField::ConfidenceScore)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stub generator that records the prompt and model it was called with
    /// and replies with a canned completion.
    struct StubGenerator {
        reply: String,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl StubGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str, model: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), model.to_string()));
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _model: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }
    }

    const SURVEY_REPLY: &str = r#"Sure! {
        "isCooked": false,
        "overallAssessment": "You are in decent shape.",
        "strengths": ["a", "b", "c"],
        "areasForImprovement": ["a", "b", "c"],
        "recommendations": ["a", "b", "c"],
        "cookedPercentage": 25
    }"#;

    const RESUME_REPLY: &str = r#"{
        "isCooked": false,
        "overallAssessment": "Strong resume.",
        "strengths": ["a", "b", "c"],
        "areasForImprovement": ["a", "b", "c"],
        "recommendations": ["a", "b", "c"],
        "confidenceScore": 80
    }"#;

    fn some_answers() -> AnswerMap {
        let mut answers = AnswerMap::new();
        answers.insert("jobType".to_string(), "Full-time".to_string());
        answers.insert("leetcode".to_string(), "0".to_string());
        answers
    }

    #[tokio::test]
    async fn test_full_survey_pipeline_passes_model_variant_through() {
        let stub = StubGenerator::new(SURVEY_REPLY);
        let result = analyze_full_survey(&some_answers(), &stub, "gemini-2.0-flash-lite")
            .await
            .unwrap();
        assert_eq!(result.cooked_percentage, 25.0);

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, "gemini-2.0-flash-lite");
        assert!(calls[0].0.contains("Survey Responses:"));
    }

    #[tokio::test]
    async fn test_resume_pipeline_normalizes_confidence_score() {
        let stub = StubGenerator::new(RESUME_REPLY);
        let result = analyze_resume_text("ten years of Rust", &stub, "gemini-1.5-flash-latest")
            .await
            .unwrap();
        assert_eq!(result.cooked_percentage, 20.0);
    }

    #[tokio::test]
    async fn test_combined_pipeline_embeds_resume_and_reduced_questions() {
        let stub = StubGenerator::new(SURVEY_REPLY);
        analyze_survey_and_resume(&some_answers(), "my resume body", &stub, "m")
            .await
            .unwrap();

        let calls = stub.calls.lock().unwrap();
        let prompt = &calls[0].0;
        assert!(prompt.contains("my resume body"));
        assert!(prompt.contains("Not Answered"));
    }

    #[tokio::test]
    async fn test_invalid_input_fails_before_any_model_call() {
        let stub = StubGenerator::new(SURVEY_REPLY);
        let err = analyze_survey_and_resume(&some_answers(), "  ", &stub, "m")
            .await
            .unwrap_err();
        assert!(matches!(err, AssessmentError::InputValidation(_)));
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_propagates_verbatim() {
        let err = analyze_full_survey(&some_answers(), &FailingGenerator, "m")
            .await
            .unwrap_err();
        match err {
            AssessmentError::Generation(LlmError::Api { status, .. }) => assert_eq!(status, 429),
            other => panic!("expected Generation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_not_retried() {
        let stub = StubGenerator::new("no json here at all");
        let err = analyze_full_survey(&some_answers(), &stub, "m")
            .await
            .unwrap_err();
        assert!(matches!(err, AssessmentError::AnalysisParse { .. }));
        assert_eq!(stub.calls.lock().unwrap().len(), 1);
    }
}
