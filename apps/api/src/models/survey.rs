use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted survey submission. `answers` is the raw answer map as
/// submitted; `analysis` the full model assessment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveyResponseRow {
    pub id: Uuid,
    pub answers: Value,
    pub resume_text: Option<String>,
    pub cooked_percentage: f64,
    pub analysis: Value,
    pub created_at: DateTime<Utc>,
}

/// Stats projection of a submission: everything except the analysis details,
/// which are excluded to keep the aggregate payload small.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SurveyStatsRow {
    pub id: Uuid,
    pub answers: Value,
    pub cooked_percentage: f64,
    pub created_at: DateTime<Utc>,
}
