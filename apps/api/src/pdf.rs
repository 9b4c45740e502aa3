//! PDF text extraction for uploaded résumés. The client sends the file as a
//! base64 string in a JSON body and gets back the plain text, which it later
//! submits alongside the survey answers.

use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ParsePdfRequest {
    /// Base64-encoded PDF bytes.
    pub file: String,
}

#[derive(Debug, Serialize)]
pub struct ParsePdfResponse {
    pub text: String,
}

/// POST /api/parse-pdf
pub async fn handle_parse_pdf(
    Json(req): Json<ParsePdfRequest>,
) -> Result<Json<ParsePdfResponse>, AppError> {
    if req.file.is_empty() {
        return Err(AppError::Validation("No file provided".to_string()));
    }

    let bytes = BASE64
        .decode(req.file.as_bytes())
        .map_err(|e| AppError::Validation(format!("file is not valid base64: {e}")))?;

    // pdf-extract is CPU-bound; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Validation(format!("Failed to parse PDF: {e}")))?;

    Ok(Json(ParsePdfResponse { text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_file_is_rejected() {
        let err = handle_parse_pdf(Json(ParsePdfRequest {
            file: String::new(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_invalid_base64_is_rejected() {
        let err = handle_parse_pdf(Json(ParsePdfRequest {
            file: "not base64!!!".to_string(),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_valid_base64_that_is_not_a_pdf_is_rejected() {
        let encoded = BASE64.encode(b"plain text, not a pdf");
        let err = handle_parse_pdf(Json(ParsePdfRequest { file: encoded }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
