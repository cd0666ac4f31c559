//! Axum route handler for the extraction endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::models::ExtractionResponse;
use crate::extraction::pipeline::extract_evaluation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// POST /avaliar
pub async fn handle_extract(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractionResponse>, AppError> {
    let Json(req) = payload.map_err(rejection_to_error)?;
    if req.text.trim().is_empty() {
        return Err(AppError::Validation(
            "Field \"text\" is required.".to_string(),
        ));
    }

    let request_id = Uuid::new_v4();
    let span = info_span!("extract_evaluation", %request_id);
    async {
        info!(text_len = req.text.len(), "Extraction request accepted");
        let response =
            extract_evaluation(&req.text, &state.catalog, state.generator.as_ref()).await?;
        Ok::<_, AppError>(Json(response))
    }
    .instrument(span)
    .await
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::JsonDataError(_) => "Field \"text\" is required and must be a string.",
        _ => "The request body must be JSON.",
    };
    AppError::Validation(message.to_string())
}
