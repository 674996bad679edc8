use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::scoring::ResumeAnalyzer;
use crate::auth::token::TokenService;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// `None` when no API key is configured; roadmaps then use the static templates.
    pub llm: Option<LlmClient>,
    pub tokens: TokenService,
    /// Pluggable résumé analyzer. LLM-backed when a key is configured, keyword otherwise.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
