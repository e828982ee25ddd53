mod colleges;
mod config;
mod courses;
mod db;
mod errors;
mod guidance;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::colleges::catalog::indian_colleges;
use crate::config::Config;
use crate::courses::matcher::CourseMatcher;
use crate::db::create_pool;
use crate::llm_client::{GeminiClient, TextGenerator, UnconfiguredGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Disha API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (optional)
    let db = match &config.database_url {
        Some(url) => Some(create_pool(url).await?),
        None => {
            warn!("DATABASE_URL not set; career maps will not be persisted");
            None
        }
    };

    // Initialize LLM client (falls back to the unconfigured stand-in without a key)
    let llm: Arc<dyn TextGenerator> = match &config.gemini_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(GeminiClient::new(key.clone())?)
        }
        None => {
            warn!("GEMINI_API_KEY not set; guidance endpoints will degrade");
            Arc::new(UnconfiguredGenerator)
        }
    };

    // Built-in catalogs, shared read-only for the life of the process
    let course_matcher =
        Arc::new(CourseMatcher::with_builtin_tables().with_limit(config.course_result_limit));
    let colleges = Arc::new(indian_colleges());
    info!(
        "Loaded {} courses and {} colleges",
        course_matcher.courses().len(),
        colleges.len()
    );

    // Build app state
    let state = AppState {
        db,
        llm,
        config: config.clone(),
        course_matcher,
        colleges,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
