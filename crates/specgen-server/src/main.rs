use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use specgen_provider::SpecProvider;
use specgen_server::{InnerAppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    let provider = config.provider();
    if provider.has_api_key() {
        info!("provider: {} ({})", provider.name(), config.anthropic_base_url);
    } else {
        warn!("ANTHROPIC_API_KEY is not set; generation requests will fail with 500");
    }

    let cors = config.cors_layer()?;
    if let Some(origin) = &config.allow_origin {
        info!("cross-origin requests allowed from {origin}");
    }

    let state = Arc::new(InnerAppState {
        provider: Arc::new(provider),
    });
    let app = specgen_server::build_app(state, cors);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("specgen-server listening on http://{addr}");

    specgen_server::serve(listener, app).await
}
