//! The assessment pipeline: prompt construction, model invocation, and
//! structured-result extraction for career-readiness ("cooked") analysis.
//!
//! Each request runs the full sequence independently; there is no shared
//! mutable state, cache, or queue between concurrent assessments.

pub mod analyze;
pub mod catalog;
pub mod extractor;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure taxonomy of the assessment pipeline. Every variant propagates
/// synchronously to the caller; the pipeline never suppresses, defaults, or
/// retries internally.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The external generation call itself failed (network, auth, quota,
    /// malformed request). Surfaced verbatim, never retried here.
    #[error("generation service call failed: {0}")]
    Generation(#[from] LlmError),

    /// The model returned text but no valid JSON object could be parsed out
    /// of it. Carries the raw text so the caller can log it for diagnosis.
    #[error("could not parse analysis from model output: {reason}")]
    AnalysisParse { reason: String, raw: String },

    /// JSON parsed but required fields were missing, mistyped, or out of
    /// range.
    #[error("analysis JSON violates the expected schema: {0}")]
    SchemaViolation(String),

    /// A caller-side precondition was violated. Detected before any model
    /// call is made.
    #[error("invalid input: {0}")]
    InputValidation(String),
}
