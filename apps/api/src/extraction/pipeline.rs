//! Extraction pipeline: orchestrates one request end to end.
//!
//! Flow: compose → generate → sanitize → validate → `ExtractionResponse`.
//!
//! Strictly sequential, no retries: any failure ends the request.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::ReferenceCatalog;
use crate::extraction::composer::compose;
use crate::extraction::models::ExtractionResponse;
use crate::extraction::sanitizer::sanitize;
use crate::extraction::validator::{validate, Outcome, SchemaViolation};
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Generated reply is empty")]
    EmptyReply,

    #[error("Generated reply is not valid JSON: {0}")]
    Parse(String),

    #[error("Generated reply violates the schema at {0}")]
    Schema(#[from] SchemaViolation),
}

pub async fn extract_evaluation(
    notes: &str,
    catalog: &ReferenceCatalog,
    generator: &dyn TextGenerator,
) -> Result<ExtractionResponse, ExtractionError> {
    let prompt = compose(notes, catalog);

    let started = Instant::now();
    let raw = generator.generate(&prompt).await?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        reply_len = raw.len(),
        "Generation call returned"
    );
    debug!("Raw reply:\n{raw}");

    let candidate = sanitize(&raw);
    if candidate.is_empty() {
        return Err(ExtractionError::EmptyReply);
    }

    match validate(candidate) {
        Outcome::NoInsight => {
            info!("Reply classified as NO_INSIGHT");
            Ok(ExtractionResponse::NoInsight)
        }
        Outcome::Success(result) => {
            info!(
                self_assessment = result.self_assessment.len(),
                evaluation360 = result.evaluation360.len(),
                mentoring = result.mentoring.is_some(),
                references = result.references.len(),
                "Reply classified as SUCCESS"
            );
            Ok(ExtractionResponse::Success(result))
        }
        Outcome::ParseError(message) => {
            warn!("Reply is not valid JSON: {message}");
            Err(ExtractionError::Parse(message))
        }
        Outcome::SchemaError(violation) => {
            warn!("Reply rejected by schema: {violation}");
            Err(ExtractionError::Schema(violation))
        }
    }
}
