mod answers;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod topics;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::answers::orchestrator::credential_is_valid;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::topics::catalog::TOPICS;

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

    info!("Starting Mnemo API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (the key may be empty; requests can bring their own)
    let llm = LlmClient::new(
        config.gemini_api_key.clone().unwrap_or_default(),
        config.gemini_api_url.clone(),
        Duration::from_secs(config.remote_timeout_secs),
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    if credential_is_valid(config.gemini_api_key.as_deref()) {
        info!("Remote answers enabled by default");
    } else {
        warn!(
            "No usable GEMINI_API_KEY; answering from {} offline topics unless a request supplies a key",
            TOPICS.len()
        );
    }

    let state = AppState::new(llm, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
