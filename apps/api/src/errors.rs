use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::pipeline::ExtractionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-correctable: the only error whose message reaches the client.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                let message = match e {
                    ExtractionError::Generation(_) => "Failed to generate the evaluation",
                    ExtractionError::EmptyReply => "The generated reply is empty or invalid",
                    ExtractionError::Parse(_) => "Failed to decode the generated JSON",
                    ExtractionError::Schema(_) => {
                        "The generated reply does not match the expected format"
                    }
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
        };

        let body = Json(json!({
            "code": "ERROR",
            "error": message
        }));

        (status, body).into_response()
    }
}
