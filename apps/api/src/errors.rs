use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::generator::GenerationError;

/// The only message callers ever see for a failed generation.
pub const GENERATION_FAILURE_DETAIL: &str = "error while parsing the AI response";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Generation(e) => {
                // The cause stays in the log; every failure looks the same on the wire.
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATION_FAILURE_DETAIL.to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_every_generation_error_maps_to_same_500() {
        let errors = vec![
            GenerationError::NoJsonFound,
            GenerationError::MalformedJson(serde_json::from_str::<Value>("{").unwrap_err()),
            GenerationError::SchemaMismatch("missing language 'de'".to_string()),
            GenerationError::UnexpectedFault("boom".to_string()),
        ];

        for err in errors {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(response).await,
                json!({"detail": "error while parsing the AI response"})
            );
        }
    }
}
