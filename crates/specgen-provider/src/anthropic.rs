use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ProviderError, SpecProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-20250514";
pub const MAX_TOKENS: u32 = 8192;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
    system: &'a str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic Messages API backend.
///
/// The API key is fixed at construction. Without one, every call fails with
/// [`ProviderError::MissingApiKey`] before any network traffic.
pub struct AnthropicProvider {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl AnthropicProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Point the provider at another Messages-compatible endpoint.
    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.filter(|k| !k.is_empty()),
            client: Client::new(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl SpecProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: [Message {
                role: "user",
                content: user_prompt,
            }],
            system: system_prompt,
        };

        let url = self.messages_url();
        debug!(%url, model = MODEL, "sending messages request");
        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("decode body: {e}")))?;
        first_text(parsed)
    }
}

fn first_text(resp: MessagesResponse) -> Result<String, ProviderError> {
    resp.content
        .into_iter()
        .find(|block| block.kind == "text")
        .and_then(|block| block.text)
        .ok_or_else(|| ProviderError::Malformed("response has no text content".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> MessagesResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn request_body_shape() {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: [Message {
                role: "user",
                content: "hi",
            }],
            system: "sys",
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["model"], "claude-sonnet-4-20250514");
        assert_eq!(v["max_tokens"], 8192);
        assert_eq!(v["system"], "sys");
        assert_eq!(v["messages"].as_array().unwrap().len(), 1);
        assert_eq!(v["messages"][0]["role"], "user");
        assert_eq!(v["messages"][0]["content"], "hi");
    }

    #[test]
    fn first_text_picks_first_text_block() {
        let resp = decode(
            r#"{"id":"msg_1","content":[{"type":"text","text":"ABC"},{"type":"text","text":"DEF"}]}"#,
        );
        assert_eq!(first_text(resp).unwrap(), "ABC");
    }

    #[test]
    fn first_text_skips_non_text_blocks() {
        let resp = decode(r#"{"content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"ok"}]}"#);
        assert_eq!(first_text(resp).unwrap(), "ok");
    }

    #[test]
    fn first_text_empty_content_is_malformed() {
        let err = first_text(decode(r#"{"content":[]}"#)).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
        let err = first_text(decode(r#"{}"#)).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[test]
    fn empty_key_counts_as_missing() {
        assert!(!AnthropicProvider::new(Some(String::new())).has_api_key());
        assert!(!AnthropicProvider::new(None).has_api_key());
        assert!(AnthropicProvider::new(Some("sk-test".into())).has_api_key());
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let p = AnthropicProvider::with_base_url("http://127.0.0.1:9999/", None);
        assert_eq!(p.messages_url(), "http://127.0.0.1:9999/v1/messages");
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        // Port 1 is never listening; reaching the network would surface as Transport.
        let p = AnthropicProvider::with_base_url("http://127.0.0.1:1", None);
        let err = p.generate("sys", "user").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
