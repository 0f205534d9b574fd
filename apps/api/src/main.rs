mod config;
mod errors;
mod jobs;
mod keywords;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::source::JobSourceClient;
use crate::keywords::MonkeyLearnExtractor;
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
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Recommender API v{}", env!("CARGO_PKG_VERSION"));

    // One pooled HTTP client shared by both outbound services
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let job_source = JobSourceClient::new(http.clone(), config.job_source_url.clone())
        .with_default_keyword(config.default_keyword.clone());
    info!("Job source: {}", config.job_source_url);

    let extractor = MonkeyLearnExtractor::new(
        http,
        &config.monkeylearn_base_url,
        &config.monkeylearn_model_id,
        config.monkeylearn_api_key.clone(),
        config.monkeylearn_max_keywords,
    );
    info!(
        "Keyword extractor initialized (model: {}, max_keywords: {})",
        config.monkeylearn_model_id, config.monkeylearn_max_keywords
    );

    let state = AppState {
        job_source,
        extractor: Arc::new(extractor),
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
