mod config;
mod errors;
mod llm_client;
mod review;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, GenerativeModel};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Review API v{}", env!("CARGO_PKG_VERSION"));

    // Without a key every review is answered with the canned result.
    let llm: Option<Arc<dyn GenerativeModel>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(key.clone(), &config)
                .context("Failed to build Gemini HTTP client")?;
            info!(
                "Gemini client initialized (model: {}, timeout: {}s, failure policy: {:?})",
                config.gemini_model,
                config.gemini_timeout.as_secs(),
                config.failure_policy
            );
            Some(Arc::new(client) as Arc<dyn GenerativeModel>)
        }
        None => {
            warn!("GEMINI_API_KEY is not set; serving canned reviews");
            None
        }
    };

    let state = AppState {
        llm,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
