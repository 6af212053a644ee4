pub mod generate;
pub mod health;

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use specgen_core::ErrorResponse;
use specgen_provider::SpecProvider;

pub struct InnerAppState {
    pub provider: Arc<dyn SpecProvider>,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(generate::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
