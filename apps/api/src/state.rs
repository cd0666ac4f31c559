use std::sync::Arc;

use crate::catalog::ReferenceCatalog;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only reference data, built once at startup.
    pub catalog: Arc<ReferenceCatalog>,
    /// Pluggable generation backend. Default: `GeminiClient`.
    pub generator: Arc<dyn TextGenerator>,
}
