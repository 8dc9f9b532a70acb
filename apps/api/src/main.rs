mod config;
mod errors;
mod evaluation;
mod llm_client;
mod matching;
mod models;
mod roster;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::{FitEvaluator, LlmFitEvaluator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Shortlist API v{}", env!("CARGO_PKG_VERSION"));

    // Load the roster (file if ROSTER_PATH is set, otherwise the embedded one)
    let roster = roster::loader::open_store(config.roster_path.as_deref())?;
    info!(
        "Roster loaded: {} consultants ({:?})",
        roster.snapshot().len(),
        roster.source()
    );

    // Fit evaluation is optional; shortlisting works without it
    let evaluator: Option<Arc<dyn FitEvaluator>> = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), &config.openai_base_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmFitEvaluator(llm)))
        }
        None => {
            warn!("OPENAI_API_KEY not set; fit evaluation endpoints will return 503");
            None
        }
    };

    let state = AppState {
        roster,
        evaluator,
        config: config.clone(),
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
