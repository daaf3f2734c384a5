use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use browserprint::GenerationError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Message returned for every generation failure; the cause goes in `details`.
pub const GENERATION_FAILED: &str = "Failed to generate fingerprint.";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Client-supplied shape is wrong; the message is returned verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Payload too large: max {0}KB allowed")]
    PayloadTooLarge(usize),

    #[error("Failed to generate fingerprint.")]
    Generation(#[from] GenerationError),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) | ServerError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ServerError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the JSON body for this error
    pub fn to_body(&self) -> ErrorResponse {
        let details = match self {
            ServerError::Generation(err) => Some(err.to_string()),
            _ => None,
        };
        ErrorResponse {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(status = %status, error = ?self, "request failed");
        }
        (status, Json(self.to_body())).into_response()
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::InvalidJson(err.to_string())
    }
}
