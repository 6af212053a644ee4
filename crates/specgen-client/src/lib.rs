pub mod clipboard;
pub mod controller;
pub mod download;
mod http;
pub mod markdown;
pub mod toast;

use async_trait::async_trait;
use specgen_core::GenerationRequest;
use thiserror::Error;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, StdoutClipboard};
pub use controller::{FormController, FormView, Submission};
pub use download::Download;
pub use http::HttpClient;
pub use markdown::render_markdown;
pub use toast::Toast;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("connection failed: {0}")]
    Transport(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("json decode: {0}")]
    Decode(String),
}

/// Where the form controller gets generated documents from.
///
/// `HttpClient` talks to a running `specgen-server`; tests substitute fakes.
#[async_trait]
pub trait SpecSource: Send + Sync {
    async fn generate(&self, req: &GenerationRequest) -> Result<String, ClientError>;
}
