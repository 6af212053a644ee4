use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use specgen_core::{GenerationRequest, GenerationResult};

use crate::{ClientError, SpecSource};

/// Async HTTP client for a running specgen-server.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the server is reachable.
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let resp = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error_with_status(status, resp).await)
        }
    }

    /// POST `/api/generate` and return the decoded result.
    pub async fn generate(&self, req: &GenerationRequest) -> Result<GenerationResult, ClientError> {
        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(req)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            resp.json::<GenerationResult>()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()))
        } else {
            Err(parse_error_with_status(status, resp).await)
        }
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> ClientError {
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"].as_str().map(String::from))
        .unwrap_or(body);
    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl SpecSource for HttpClient {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, ClientError> {
        HttpClient::generate(self, req)
            .await
            .map(|result| result.specification)
    }
}
