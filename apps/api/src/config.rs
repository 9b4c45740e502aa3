use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    /// Model variant for full-survey analysis (cheap, high-volume path).
    pub survey_model: String,
    /// Model variant for any path that reads résumé text (higher capability).
    pub resume_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            survey_model: std::env::var("GEMINI_SURVEY_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-lite".to_string()),
            resume_model: std::env::var("GEMINI_RESUME_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash-latest".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
