use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use clap::Parser;
use specgen_provider::anthropic::DEFAULT_BASE_URL;
use specgen_provider::AnthropicProvider;
use tower_http::cors::CorsLayer;

#[derive(Debug, Parser)]
#[command(name = "specgen-server", about = "Technical specification generator API")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "SPECGEN_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "SPECGEN_PORT", default_value = "3000")]
    pub port: u16,

    /// Anthropic API key. Requests fail with 500 while it is unset.
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    /// Base URL of the Messages API (override for proxies and fakes)
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub anthropic_base_url: String,

    /// Browser origin allowed to call the API cross-origin
    #[arg(long, env = "SPECGEN_ALLOW_ORIGIN")]
    pub allow_origin: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn provider(&self) -> AnthropicProvider {
        AnthropicProvider::with_base_url(&self.anthropic_base_url, self.anthropic_api_key.clone())
    }

    /// CORS layer for `--allow-origin`, or `None` for same-origin only.
    pub fn cors_layer(&self) -> Result<Option<CorsLayer>> {
        let Some(origin) = &self.allow_origin else {
            return Ok(None);
        };
        let origin = HeaderValue::from_str(origin)
            .with_context(|| format!("invalid SPECGEN_ALLOW_ORIGIN value: {origin}"))?;
        Ok(Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::POST])
                .allow_headers([CONTENT_TYPE]),
        ))
    }
}
