//! Result Extractor — recovers a validated [`AssessmentResult`] from raw
//! model output, tolerating JSON wrapped in prose, markdown fences, or
//! trailing commentary.
//!
//! The JSON object is located with a string-aware balanced-brace scan (a
//! first-`{`-to-last-`}` slice breaks as soon as the model emits a second
//! JSON-like fragment). The parsed object is then validated field by field
//! rather than trusted to match the schema instruction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assessment::AssessmentError;

/// Which score field the prompt instructed the model to emit. The two
/// builder variants use distinct names so result sources stay
/// distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    /// Survey paths. 0 = fully ready, 100 = fully unprepared.
    CookedPercentage,
    /// Résumé-only path. Inverted polarity: 100 = fully prepared.
    ConfidenceScore,
}

impl ScoreField {
    fn key(self) -> &'static str {
        match self {
            ScoreField::CookedPercentage => "cookedPercentage",
            ScoreField::ConfidenceScore => "confidenceScore",
        }
    }
}

/// A validated assessment. `cooked_percentage` always carries the canonical
/// polarity (0 = fully ready, 100 = fully cooked) regardless of which score
/// field the model was asked for; `confidenceScore` is normalized as
/// `100 - score` at extraction. Constructed once per request and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub is_cooked: bool,
    pub overall_assessment: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendations: Vec<String>,
    pub cooked_percentage: f64,
}

/// Extracts and validates an assessment from raw model text.
pub fn extract_assessment(
    raw: &str,
    score_field: ScoreField,
) -> Result<AssessmentResult, AssessmentError> {
    let json_str = find_json_object(raw).ok_or_else(|| AssessmentError::AnalysisParse {
        reason: "no JSON object found in model output".to_string(),
        raw: raw.to_string(),
    })?;

    let value: Value =
        serde_json::from_str(json_str).map_err(|e| AssessmentError::AnalysisParse {
            reason: e.to_string(),
            raw: raw.to_string(),
        })?;

    validate(&value, score_field)
}

/// Returns the first complete `{...}` object in `text`, matching braces while
/// skipping any that appear inside JSON string literals.
fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    // Opening brace never closed.
    None
}

fn validate(value: &Value, score_field: ScoreField) -> Result<AssessmentResult, AssessmentError> {
    let obj = value
        .as_object()
        .ok_or_else(|| AssessmentError::SchemaViolation("analysis is not a JSON object".into()))?;

    let is_cooked = obj
        .get("isCooked")
        .and_then(Value::as_bool)
        .ok_or_else(|| missing_or_mistyped("isCooked", "boolean"))?;

    let overall_assessment = obj
        .get("overallAssessment")
        .and_then(Value::as_str)
        .ok_or_else(|| missing_or_mistyped("overallAssessment", "string"))?
        .to_string();

    let strengths = string_list(obj.get("strengths"), "strengths")?;
    let areas_for_improvement =
        string_list(obj.get("areasForImprovement"), "areasForImprovement")?;
    let recommendations = string_list(obj.get("recommendations"), "recommendations")?;

    let score = obj
        .get(score_field.key())
        .and_then(Value::as_f64)
        .ok_or_else(|| missing_or_mistyped(score_field.key(), "number"))?;

    if !(0.0..=100.0).contains(&score) {
        return Err(AssessmentError::SchemaViolation(format!(
            "{} is {score}, outside [0, 100]",
            score_field.key()
        )));
    }

    let cooked_percentage = match score_field {
        ScoreField::CookedPercentage => score,
        ScoreField::ConfidenceScore => 100.0 - score,
    };

    Ok(AssessmentResult {
        is_cooked,
        overall_assessment,
        strengths,
        areas_for_improvement,
        recommendations,
        cooked_percentage,
    })
}

/// A list field must be an array of strings. Any length is tolerated; a
/// scalar or mixed-type array is not.
fn string_list(value: Option<&Value>, key: &str) -> Result<Vec<String>, AssessmentError> {
    let items = value
        .and_then(Value::as_array)
        .ok_or_else(|| missing_or_mistyped(key, "array of strings"))?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                AssessmentError::SchemaViolation(format!("{key} contains a non-string element"))
            })
        })
        .collect()
}

fn missing_or_mistyped(key: &str, expected: &str) -> AssessmentError {
    AssessmentError::SchemaViolation(format!("field '{key}' is missing or not a {expected}"))
}
