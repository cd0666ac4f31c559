mod catalog;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{builtin::default_catalog, ReferenceCatalog};
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting review extractor v{}", env!("CARGO_PKG_VERSION"));

    // Reference catalog: immutable for the lifetime of the process
    let catalog = match &config.catalog_path {
        Some(path) => ReferenceCatalog::load_from_path(path)
            .with_context(|| format!("Failed to load reference catalog from {}", path.display()))?,
        None => default_catalog(),
    };
    info!(
        "Reference catalog loaded: {} pillars, {} criteria, {} collaborators",
        catalog.pillars.len(),
        catalog.criteria_count(),
        catalog.collaborators.len()
    );

    // Initialize generation client
    let generator = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_api_url.clone())
        .context("Failed to build the Gemini HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        catalog: Arc::new(catalog),
        generator: Arc::new(generator),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
