//! HttpClient + FormController against a real in-process specgen-server.

use std::sync::Arc;

use reqwest::StatusCode;
use specgen_client::controller::MSG_GENERATION_FAILED;
use specgen_client::{ClientError, FormController, HttpClient, MemoryClipboard, Submission};
use specgen_core::{DetailLevel, GenerationRequest, Language};
use specgen_provider::{AnthropicProvider, MockProvider};
use specgen_server::test_helpers::{anthropic_reply, spawn_fake_anthropic, spawn_test_server};

fn request(idea: &str) -> GenerationRequest {
    GenerationRequest {
        product_idea: idea.into(),
        detail_level: DetailLevel::Brief,
        language: Language::En,
    }
}

#[tokio::test]
async fn health_check_via_http() {
    let server = spawn_test_server(Arc::new(MockProvider::success("x"))).await;
    HttpClient::new(&server.base_url).health_check().await.unwrap();
}

#[tokio::test]
async fn generate_via_http() {
    let mock = Arc::new(MockProvider::success("ABC"));
    let server = spawn_test_server(mock.clone()).await;

    let result = HttpClient::new(&server.base_url)
        .generate(&request("a recipe app"))
        .await
        .unwrap();
    assert_eq!(result.specification, "ABC");

    let (system, user) = &mock.calls()[0];
    assert!(system.contains("English language"));
    assert!(user.contains("a recipe app"));
}

#[tokio::test]
async fn server_errors_surface_as_status() {
    let server = spawn_test_server(Arc::new(MockProvider::failure(503, "upstream detail"))).await;
    let err = HttpClient::new(&server.base_url)
        .generate(&request("idea"))
        .await
        .unwrap_err();
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "AI generation failed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn blank_idea_rejected_by_server() {
    let server = spawn_test_server(Arc::new(MockProvider::success("x"))).await;
    let err = HttpClient::new(&server.base_url)
        .generate(&request("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 400, .. }));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let err = HttpClient::new("http://127.0.0.1:1")
        .generate(&request("idea"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn form_round_trip_through_anthropic_fake() {
    let text = "# Спецификация\n\n- **Цель**: учёт\n- Роли\n\nТекст *курсивом*";
    let upstream = spawn_fake_anthropic(StatusCode::OK, anthropic_reply(text)).await;
    let provider = AnthropicProvider::with_base_url(&upstream.base_url, Some("sk-test".into()));
    let server = spawn_test_server(Arc::new(provider)).await;

    let mut form = FormController::new(HttpClient::new(&server.base_url));
    form.set_idea("Учёт расходов для семьи");
    let outcome = form.submit(DetailLevel::Standard, Language::Ru).await;
    assert_eq!(outcome, Submission::Generated);

    assert_eq!(form.generated(), text);
    assert_eq!(
        form.view().result_html,
        "<h1>Спецификация</h1></p><p><ul><li><strong>Цель</strong>: учёт</li>\n<li>Роли</li></ul></p><p>Текст <em>курсивом</em>"
    );

    let mut clipboard = MemoryClipboard::default();
    form.copy(&mut clipboard).unwrap();
    assert_eq!(clipboard.contents(), Some(text));

    let dir = tempfile::tempdir().unwrap();
    let path = form.download().save_in(dir.path()).await.unwrap();
    assert_eq!(std::fs::read(path).unwrap(), text.as_bytes());
}

#[tokio::test]
async fn form_failure_shows_toast() {
    let upstream = spawn_fake_anthropic(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({ "type": "error", "error": { "type": "api_error", "message": "boom" } }),
    )
    .await;
    let provider = AnthropicProvider::with_base_url(&upstream.base_url, Some("sk-test".into()));
    let server = spawn_test_server(Arc::new(provider)).await;

    let mut form = FormController::new(HttpClient::new(&server.base_url));
    form.set_idea("idea");
    assert_eq!(form.submit(DetailLevel::Brief, Language::En).await, Submission::Failed);
    assert!(!form.view().result_visible);
    assert_eq!(form.toast(), Some(MSG_GENERATION_FAILED));
}
