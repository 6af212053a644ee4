use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use specgen_provider::{MockProvider, SpecProvider};
use tokio::net::TcpListener;

use crate::routes::{build_router, InnerAppState};

/// Build a router around any provider, no extra layers.
pub fn test_router(provider: Arc<dyn SpecProvider>) -> Router {
    build_router(Arc::new(InnerAppState { provider }))
}

/// Build a router backed by a [`MockProvider`] that answers with `text`,
/// returning the mock so tests can inspect the calls it received.
pub fn mock_router(text: &str) -> (Router, Arc<MockProvider>) {
    let mock = Arc::new(MockProvider::success(text));
    (test_router(mock.clone()), mock)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum server for `app` on a random port.
pub async fn spawn_app(app: Router) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}

/// Spawn the generator API on a random port, backed by `provider`.
pub async fn spawn_test_server(provider: Arc<dyn SpecProvider>) -> TestServer {
    spawn_app(test_router(provider)).await
}

/// Spawn a stand-in for the Anthropic Messages endpoint that always answers
/// `/v1/messages` with `status` and `reply`.
pub async fn spawn_fake_anthropic(status: StatusCode, reply: Value) -> TestServer {
    let app = Router::new().route(
        "/v1/messages",
        post(move || {
            let reply = reply.clone();
            async move { (status, Json(reply)) }
        }),
    );
    spawn_app(app).await
}

/// A minimal successful Messages API reply carrying `text`.
pub fn anthropic_reply(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": specgen_provider::anthropic::MODEL,
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 10, "output_tokens": 20 }
    })
}
