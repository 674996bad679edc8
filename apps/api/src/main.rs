mod analysis;
mod auth;
mod config;
mod db;
mod errors;
mod extractors;
mod llm_client;
mod models;
mod profile;
mod roadmap;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::scoring::{KeywordResumeAnalyzer, LlmResumeAnalyzer, ResumeAnalyzer};
use crate::auth::token::TokenService;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPrep API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "LLM API key configured: {}, endpoint: {}, model: {}",
        config.llm_api_key.is_some(),
        config.llm_api_url,
        config.llm_model
    );

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(
        &config.database_url,
        Duration::from_secs(config.db_connect_timeout_secs),
    )
    .await?;

    // Initialize LLM client when a key is present
    let llm = match &config.llm_api_key {
        Some(key) => Some(LlmClient::new(
            key.clone(),
            config.llm_api_url.clone(),
            config.llm_model.clone(),
        )?),
        None => {
            warn!("No GROQ_API_KEY set; analysis and roadmaps use their offline fallbacks");
            None
        }
    };

    let analyzer: Arc<dyn ResumeAnalyzer> = match &llm {
        Some(llm) => Arc::new(LlmResumeAnalyzer::new(llm.clone())),
        None => Arc::new(KeywordResumeAnalyzer),
    };

    let state = AppState {
        db,
        llm,
        tokens: TokenService::new(&config.jwt_secret),
        analyzer,
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
