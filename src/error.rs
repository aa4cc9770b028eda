use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;

/// Message returned to callers for every recommendation failure.
pub const GENERATION_FAILED_MESSAGE: &str = "AIによるおすすめの生成に失敗しました。";

/// Application-level errors
///
/// Variants stay distinct for logging; callers only ever see
/// [`GENERATION_FAILED_MESSAGE`].
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Gemini API key is not configured")]
    MissingCredential,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Model returned no text")]
    EmptyCompletion,

    #[error("Model output is not valid JSON: {0}")]
    InvalidModelOutput(#[from] serde_json::Error),

    #[error("Request body has the wrong shape: {0}")]
    InvalidRequestBody(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Recommendation generation failed");

        let body = Json(ErrorResponse {
            error: GENERATION_FAILED_MESSAGE.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_every_variant_maps_to_same_response() {
        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

        for error in [
            AppError::MissingCredential,
            AppError::ExternalApi("Gemini API returned status 503".to_string()),
            AppError::EmptyCompletion,
            AppError::InvalidModelOutput(parse_error),
            AppError::InvalidRequestBody("favoriteBooks: invalid type: null".to_string()),
        ] {
            let (status, body) = body_of(error).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, serde_json::json!({ "error": GENERATION_FAILED_MESSAGE }));
        }
    }

    #[tokio::test]
    async fn test_cause_is_not_leaked() {
        let (_, body) = body_of(AppError::ExternalApi("key=abc123 rejected".to_string())).await;
        assert!(!body.to_string().contains("abc123"));
    }
}
