use axum::{http::StatusCode, Json};
use specgen_core::{ErrorResponse, SpecgenError};
use specgen_provider::ProviderError;
use thiserror::Error;
use tracing::error;

/// Everything that can go wrong while serving `/api/generate`.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Input(#[from] SpecgenError),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("{provider}: {source}")]
    Provider {
        provider: String,
        #[source]
        source: ProviderError,
    },
}

/// Map an error to its HTTP status and client-visible message.
///
/// Provider detail never reaches the client; it is logged here instead.
pub fn to_error(e: GenerateError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, msg) = match &e {
        GenerateError::Input(SpecgenError::MissingIdea) => {
            (StatusCode::BAD_REQUEST, SpecgenError::MissingIdea.to_string())
        }
        GenerateError::Input(SpecgenError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        GenerateError::MalformedBody(_) => {
            error!("Error: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
        }
        GenerateError::Provider { provider, source } => match source {
            ProviderError::MissingApiKey => {
                error!(%provider, "API key not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, "API key not configured".to_string())
            }
            ProviderError::Status { status, body } => {
                error!(%provider, status, %body, "AI provider error");
                (StatusCode::INTERNAL_SERVER_ERROR, "AI generation failed".to_string())
            }
            ProviderError::Transport(detail) => {
                error!(%provider, %detail, "AI provider unreachable");
                (StatusCode::INTERNAL_SERVER_ERROR, "AI generation failed".to_string())
            }
            ProviderError::Malformed(detail) => {
                error!(%provider, %detail, "Error: unexpected provider response");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        },
    };
    (status, Json(ErrorResponse::new(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_err(source: ProviderError) -> GenerateError {
        GenerateError::Provider {
            provider: "mock".into(),
            source,
        }
    }

    #[test]
    fn missing_idea_is_bad_request() {
        let (status, Json(body)) = to_error(SpecgenError::MissingIdea.into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Product idea is required");
    }

    #[test]
    fn malformed_body_is_generic_500() {
        let (status, Json(body)) = to_error(GenerateError::MalformedBody("EOF while parsing".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
    }

    #[test]
    fn provider_errors_hide_detail() {
        let cases = [
            (provider_err(ProviderError::MissingApiKey), "API key not configured"),
            (
                provider_err(ProviderError::Status {
                    status: 401,
                    body: "invalid x-api-key".into(),
                }),
                "AI generation failed",
            ),
            (provider_err(ProviderError::Transport("dns error".into())), "AI generation failed"),
            (provider_err(ProviderError::Malformed("no text".into())), "Internal server error"),
        ];
        for (err, expected) in cases {
            let (status, Json(body)) = to_error(err);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body.error, expected);
        }
    }
}
