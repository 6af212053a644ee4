use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use specgen_core::{ErrorResponse, GenerateBody, GenerationResult};
use specgen_prompts::assemble_prompt;
use tracing::info;

use super::AppState;
use crate::error::{to_error, GenerateError};

pub fn routes() -> Router<AppState> {
    // Ideas have no size cap, so the default 2 MB extractor limit is lifted.
    Router::new()
        .route("/api/generate", post(generate).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::disable())
}

// The body is decoded by hand so that bad JSON maps to 500 like any other
// unexpected failure, regardless of the request's Content-Type.
async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerationResult>, (StatusCode, Json<ErrorResponse>)> {
    let input: GenerateBody = serde_json::from_slice(&body)
        .map_err(|e| to_error(GenerateError::MalformedBody(e.to_string())))?;
    let req = input.validate().map_err(|e| to_error(e.into()))?;

    let prompt = assemble_prompt(&req);
    let provider = state.provider.name();
    info!(
        %provider,
        detail_level = %req.detail_level,
        language = %req.language,
        idea_len = req.product_idea.len(),
        "generating specification"
    );

    let specification = state
        .provider
        .generate(&prompt.system, &prompt.user)
        .await
        .map_err(|source| {
            to_error(GenerateError::Provider {
                provider: provider.to_string(),
                source,
            })
        })?;

    Ok(Json(GenerationResult { specification }))
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}
