//! API route handlers
//!
//! - `fingerprint`: default and constrained fingerprint generation
//! - `configurations`: echo of path-encoded configurations
//! - `health`: liveness

pub mod configurations;
pub mod fingerprint;
pub mod health;

use crate::error::ServerError;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
///
/// # Response
///
/// ```json
/// {
///   "name": "browserprint-server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "browserprint-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "GET /fingerprint",
            "GET /configurations/{locales}/{browsers}/{devices}",
            "POST /generate-fingerprint",
            "GET /health"
        ]
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
