use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::pages;

/// Failure of the outbound image generation call. Never cached.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    #[error("API response contained no images")]
    EmptyResponse,
}

/// Errors surfaced at the route boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No prompt provided")]
    MissingPrompt,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("invalid image data: {0}")]
    InvalidImageData(#[from] base64::DecodeError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingPrompt => StatusCode::BAD_REQUEST,
            AppError::Generation(_) | AppError::InvalidImageData(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Html(pages::error_page(&self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = GenerationError::Api {
            status: 503,
            body: "upstream unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - upstream unavailable");
    }

    #[test]
    fn status_codes_split_input_from_upstream_failures() {
        assert_eq!(AppError::MissingPrompt.status(), StatusCode::BAD_REQUEST);
        let upstream = AppError::from(GenerationError::EmptyResponse);
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
