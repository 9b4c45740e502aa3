use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::analyze::{
    analyze_full_survey, analyze_resume_text, analyze_survey_and_resume,
};
use crate::assessment::extractor::AssessmentResult;
use crate::assessment::prompt_builder::AnswerMap;
use crate::errors::AppError;
use crate::models::survey::{SurveyResponseRow, SurveyStatsRow};
use crate::state::AppState;

/// An inbound survey submission: the flattened question-id -> option map,
/// plus optional résumé text under its reserved key.
#[derive(Debug, Deserialize)]
pub struct SurveySubmission {
    #[serde(rename = "resumeText")]
    pub resume_text: Option<String>,
    #[serde(flatten)]
    pub answers: AnswerMap,
}

#[derive(Debug, Serialize)]
pub struct SurveyAnalysisResponse {
    pub message: String,
    pub analysis: AssessmentResult,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    #[serde(rename = "resumeText")]
    pub resume_text: String,
}

fn usable_resume_text(resume_text: &Option<String>) -> Option<&str> {
    resume_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
}

/// POST /api/survey
///
/// Dispatches to the combined path when résumé text accompanies the answers,
/// otherwise to the full-survey path. The submission and its score are
/// persisted before the analysis is returned.
pub async fn handle_submit_survey(
    State(state): State<AppState>,
    Json(submission): Json<SurveySubmission>,
) -> Result<(StatusCode, Json<SurveyAnalysisResponse>), AppError> {
    let analysis = match usable_resume_text(&submission.resume_text) {
        Some(resume_text) => {
            info!("Analyzing survey with resume text");
            analyze_survey_and_resume(
                &submission.answers,
                resume_text,
                &state.llm,
                &state.config.resume_model,
            )
            .await?
        }
        None => {
            info!("Analyzing full survey without resume text");
            analyze_full_survey(&submission.answers, &state.llm, &state.config.survey_model)
                .await?
        }
    };

    let id = Uuid::new_v4();
    let answers_json = serde_json::to_value(&submission.answers)
        .map_err(|e| AppError::Internal(e.into()))?;
    let analysis_json =
        serde_json::to_value(&analysis).map_err(|e| AppError::Internal(e.into()))?;

    let saved: SurveyResponseRow = sqlx::query_as(
        r#"
        INSERT INTO survey_responses (id, answers, resume_text, cooked_percentage, analysis)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&answers_json)
    .bind(usable_resume_text(&submission.resume_text))
    .bind(analysis.cooked_percentage)
    .bind(&analysis_json)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Survey response {} saved (cooked_percentage={})",
        saved.id, saved.cooked_percentage
    );

    Ok((
        StatusCode::CREATED,
        Json(SurveyAnalysisResponse {
            message: "Survey response saved successfully".to_string(),
            analysis,
        }),
    ))
}

/// GET /api/survey/stats
///
/// Every stored submission without the analysis details, for aggregate
/// statistics on the client.
pub async fn handle_survey_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<SurveyStatsRow>>, AppError> {
    let rows: Vec<SurveyStatsRow> = sqlx::query_as(
        "SELECT id, answers, cooked_percentage, created_at FROM survey_responses ORDER BY created_at",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/analyze-resume
///
/// Résumé-only assessment. Not persisted.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeResumeRequest>,
) -> Result<Json<SurveyAnalysisResponse>, AppError> {
    let analysis =
        analyze_resume_text(&req.resume_text, &state.llm, &state.config.resume_model).await?;

    Ok(Json(SurveyAnalysisResponse {
        message: "Resume analyzed successfully".to_string(),
        analysis,
    }))
}
