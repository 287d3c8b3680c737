mod config;
mod content;
mod errors;
mod models;
mod pages;
mod relay;
mod render;
mod routes;
mod seo;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::image::ImageUrlBuilder;
use crate::content::ContentClient;
use crate::relay::RelayClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio site v{}", env!("CARGO_PKG_VERSION"));

    // Content Store client — every page read goes through this
    let content = ContentClient::new(&config);
    info!(
        "Content client initialized (dataset: {})",
        config.content_dataset
    );

    // Image CDN URL builder
    let images = ImageUrlBuilder::new(&config.content_project_id, &config.content_dataset);

    // Form relay client — the access key is checked per submission
    let relay = RelayClient::new(
        config.form_relay_endpoint.clone(),
        config.form_relay_access_key.clone(),
    );
    if config.form_relay_access_key.is_none() {
        info!("Form relay access key not set; contact submissions will be refused");
    }

    // Build app state
    let state = AppState {
        content,
        relay,
        images,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
