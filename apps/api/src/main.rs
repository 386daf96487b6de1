mod company_client;
mod config;
mod enrichment;
mod errors;
mod jobs;
mod models;
mod routes;
mod search_client;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::company_client::CompanyClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::search_client::SearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prospect API v{}", env!("CARGO_PKG_VERSION"));

    let search = Arc::new(SearchClient::new());
    if config.search_api_key.is_none() {
        info!("No process-wide SEARCH_API_KEY set; requests must carry their own");
    }

    let companies = Arc::new(CompanyClient::new(
        config.company_api_url.clone(),
        config.company_api_key.clone(),
    ));
    info!("Company directory client initialized ({})", config.company_api_url);

    let state = AppState {
        search,
        companies,
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
