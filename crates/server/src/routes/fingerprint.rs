use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use browserprint::{Fingerprint, FingerprintOptions};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Upper bound on `locales` accepted by `POST /generate-fingerprint`.
pub const MAX_LOCALES: usize = 10;

pub const ARRAYS_REQUIRED: &str = "All inputs must be arrays.";
pub const STRINGS_REQUIRED: &str = "All array items must be strings.";
pub const TOO_MANY_LOCALES: &str = "Locales array must not exceed 10 items.";

/// Options used by `GET /fingerprint`.
pub fn default_options() -> FingerprintOptions {
    FingerprintOptions::new()
        .with_locales(["en", "en-US"])
        .with_browsers(["chrome"])
        .with_devices(["desktop"])
}

/// Generate a fingerprint with the default desktop Chrome configuration.
///
/// # Response
///
/// The generated fingerprint object, forwarded verbatim.
pub async fn get_fingerprint(State(state): State<Arc<ServerState>>) -> ServerResult<Json<Fingerprint>> {
    let profile = state.generator.generate(&default_options())?;
    Ok(Json(profile.fingerprint))
}

/// Generate a fingerprint from caller-supplied constraints.
///
/// # Example
/// ```json
/// // Request
/// {
///   "browsers": ["chrome", "firefox"],
///   "operatingSystems": ["windows"],
///   "devices": ["desktop"],
///   "locales": ["en-US", "de"]
/// }
/// ```
///
/// All four fields are required arrays of strings and `locales` may hold at
/// most [`MAX_LOCALES`] entries; violations answer 400. Generation failures
/// answer 500 with the generator's message in `details`.
///
/// Bodies without a JSON content type are not parsed and count as `{}`.
pub async fn generate_fingerprint(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<Fingerprint>> {
    let options = if is_json_content_type(&headers) {
        let body = body.map_err(|rejection| body_rejection(rejection, &state))?;
        parse_generate_request(&body)?
    } else {
        parse_generate_request(&[])?
    };

    tracing::debug!(
        browsers = ?options.browsers,
        operating_systems = ?options.operating_systems,
        devices = ?options.devices,
        locales = ?options.locales,
        "generating fingerprint"
    );

    let profile = state.generator.generate(&options)?;
    Ok(Json(profile.fingerprint))
}

fn body_rejection(rejection: BytesRejection, state: &ServerState) -> ServerError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge(state.config.max_body_size_kb)
    } else {
        ServerError::InvalidJson(rejection.body_text())
    }
}

/// Whether `Content-Type` is `application/json` or an `application/*+json`
/// subtype, ignoring parameters such as `charset`.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse and validate a `POST /generate-fingerprint` body.
///
/// An empty body, or a JSON value that is not an object, is read as an
/// object without fields and therefore fails the array check.
pub fn parse_generate_request(body: &[u8]) -> ServerResult<FingerprintOptions> {
    let object = if body.iter().all(u8::is_ascii_whitespace) {
        Map::new()
    } else {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(object) => object,
            _ => Map::new(),
        }
    };

    let browsers = array_field(&object, "browsers")?;
    let operating_systems = array_field(&object, "operatingSystems")?;
    let devices = array_field(&object, "devices")?;
    let locales = array_field(&object, "locales")?;

    if locales.len() > MAX_LOCALES {
        return Err(ServerError::Validation(TOO_MANY_LOCALES.to_string()));
    }

    Ok(FingerprintOptions {
        locales: strings(locales)?,
        browsers: strings(browsers)?,
        operating_systems: strings(operating_systems)?,
        devices: strings(devices)?,
    })
}

fn array_field<'a>(object: &'a Map<String, Value>, name: &str) -> ServerResult<&'a [Value]> {
    match object.get(name) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        _ => Err(ServerError::Validation(ARRAYS_REQUIRED.to_string())),
    }
}

fn strings(items: &[Value]) -> ServerResult<Vec<String>> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(ServerError::Validation(STRINGS_REQUIRED.to_string())),
        })
        .collect()
}
