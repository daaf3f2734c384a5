//! HTTP integration tests driving the router in-process.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::Router;
use browserprint::{
    FingerprintGenerator, FingerprintOptions, GenerateFingerprint, GeneratedProfile,
    GenerationError,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::middleware::request_timeout;
use server::{build_router, ServerConfig, ServerState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Always fails with a fixed cause.
struct FailingGenerator;

impl GenerateFingerprint for FailingGenerator {
    fn generate(&self, _options: &FingerprintOptions) -> Result<GeneratedProfile, GenerationError> {
        Err(GenerationError::InvalidWeights("catalog exhausted".into()))
    }
}

/// Counts calls and records the last options, delegating to a seeded generator.
#[derive(Default)]
struct RecordingGenerator {
    calls: AtomicUsize,
    last: Mutex<Option<FingerprintOptions>>,
}

impl GenerateFingerprint for RecordingGenerator {
    fn generate(&self, options: &FingerprintOptions) -> Result<GeneratedProfile, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(options.clone());
        FingerprintGenerator::with_seed(11).generate(options)
    }
}

fn app_with(generator: Arc<dyn GenerateFingerprint>) -> Router {
    build_router(Arc::new(ServerState::with_generator(
        ServerConfig::default(),
        generator,
    )))
}

fn seeded_app() -> Router {
    app_with(Arc::new(FingerprintGenerator::with_seed(42)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn generate_body(locales: Vec<&str>) -> String {
    json!({
        "browsers": ["chrome"],
        "operatingSystems": ["windows"],
        "devices": ["desktop"],
        "locales": locales,
    })
    .to_string()
}

#[tokio::test]
async fn test_get_fingerprint_uses_default_configuration() {
    let recorder = Arc::new(RecordingGenerator::default());
    let (status, _, body) = send(app_with(recorder.clone()), get("/fingerprint")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["navigator"]["userAgent"].as_str().unwrap().contains("Chrome/"));
    assert_eq!(body["navigator"]["language"], "en");

    assert_eq!(recorder.calls.load(Ordering::SeqCst), 1);
    let options = recorder.last.lock().unwrap().clone().unwrap();
    assert_eq!(options.locales, vec!["en", "en-US"]);
    assert_eq!(options.browsers, vec!["chrome"]);
    assert_eq!(options.devices, vec!["desktop"]);
    assert!(options.operating_systems.is_empty());
}

#[tokio::test]
async fn test_get_fingerprint_failure_is_500_with_details() {
    let (status, _, body) = send(app_with(Arc::new(FailingGenerator)), get("/fingerprint")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate fingerprint.");
    assert!(body["details"].as_str().unwrap().contains("catalog exhausted"));
}

#[tokio::test]
async fn test_configurations_echo_splits_segments() {
    let recorder = Arc::new(RecordingGenerator::default());
    let (status, _, body) = send(
        app_with(recorder.clone()),
        get("/configurations/en-US,de/chrome/desktop"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "locales": ["en-US", "de"],
            "browsers": ["chrome"],
            "devices": ["desktop"],
        })
    );
    assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_configurations_echo_does_not_validate() {
    let (status, _, body) = send(seeded_app(), get("/configurations/xx/netscape,/toaster")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["locales"], json!(["xx"]));
    assert_eq!(body["browsers"], json!(["netscape", ""]));
    assert_eq!(body["devices"], json!(["toaster"]));
}

#[tokio::test]
async fn test_generate_fingerprint_success() {
    let recorder = Arc::new(RecordingGenerator::default());
    let (status, _, body) = send(
        app_with(recorder.clone()),
        post_json("/generate-fingerprint", generate_body(vec!["en-US", "fr"])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["navigator"]["userAgent"].as_str().unwrap().contains("Windows NT 10.0"));
    assert_eq!(body["navigator"]["languages"], json!(["en-US", "fr"]));

    let options = recorder.last.lock().unwrap().clone().unwrap();
    assert_eq!(options.operating_systems, vec!["windows"]);
    assert_eq!(options.locales, vec!["en-US", "fr"]);
}

#[tokio::test]
async fn test_generate_fingerprint_matches_library_output() {
    let (status, _, body) = send(
        seeded_app(),
        post_json("/generate-fingerprint", generate_body(vec!["en-US"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let options = FingerprintOptions::new()
        .with_browsers(["chrome"])
        .with_operating_systems(["windows"])
        .with_devices(["desktop"])
        .with_locales(["en-US"]);
    let expected = FingerprintGenerator::with_seed(42).generate(&options).unwrap();
    assert_eq!(body, serde_json::to_value(expected.fingerprint).unwrap());
}

#[tokio::test]
async fn test_non_array_field_is_rejected_without_generating() {
    let recorder = Arc::new(RecordingGenerator::default());
    let body = json!({
        "browsers": "chrome",
        "operatingSystems": [],
        "devices": [],
        "locales": [],
    });
    let (status, _, response) = send(
        app_with(recorder.clone()),
        post_json("/generate-fingerprint", body.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({ "error": "All inputs must be arrays." }));
    assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let body = json!({ "browsers": [], "devices": [], "locales": [] });
    let (status, _, response) =
        send(seeded_app(), post_json("/generate-fingerprint", body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "All inputs must be arrays.");
}

#[tokio::test]
async fn test_empty_body_is_rejected_as_non_arrays() {
    let (status, _, response) = send(seeded_app(), post_json("/generate-fingerprint", "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "All inputs must be arrays.");
}

#[tokio::test]
async fn test_too_many_locales_is_rejected_without_generating() {
    let recorder = Arc::new(RecordingGenerator::default());
    let locales = vec!["en", "en-US", "en-GB", "de", "fr", "es", "it", "pt", "nl", "ru", "ja"];
    let (status, _, response) = send(
        app_with(recorder.clone()),
        post_json("/generate-fingerprint", generate_body(locales)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response,
        json!({ "error": "Locales array must not exceed 10 items." })
    );
    assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ten_locales_are_accepted() {
    let locales = vec!["en", "en-US", "en-GB", "de", "fr", "es", "it", "pt", "nl", "ru"];
    let (status, _, _) = send(
        seeded_app(),
        post_json("/generate-fingerprint", generate_body(locales)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_generation_failure_is_500_with_details() {
    let (status, _, response) = send(
        app_with(Arc::new(FailingGenerator)),
        post_json("/generate-fingerprint", generate_body(vec!["en"])),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response,
        json!({
            "error": "Failed to generate fingerprint.",
            "details": "invalid weight table: catalog exhausted",
        })
    );
}

#[tokio::test]
async fn test_impossible_combination_is_500_from_real_generator() {
    let body = json!({
        "browsers": ["safari"],
        "operatingSystems": ["windows"],
        "devices": [],
        "locales": [],
    });
    let (status, _, response) =
        send(seeded_app(), post_json("/generate-fingerprint", body.to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"], "Failed to generate fingerprint.");
    assert!(response["details"].as_str().unwrap().contains("no fingerprint profile"));
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (status, _, response) =
        send(seeded_app(), post_json("/generate-fingerprint", "{\"browsers\": [")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn test_oversized_body_is_413() {
    let padding = "x".repeat(200 * 1024);
    let body = json!({
        "browsers": [],
        "operatingSystems": [],
        "devices": [],
        "locales": [],
        "padding": padding,
    });
    let (status, _, response) =
        send(seeded_app(), post_json("/generate-fingerprint", body.to_string())).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response["error"].as_str().unwrap().contains("Payload too large"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, _, body) = send(seeded_app(), get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_health_and_info() {
    let (status, _, body) = send(seeded_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _, body) = send(seeded_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "browserprint-server");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .contains(&json!("POST /generate-fingerprint")));
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(seeded_app(), request).await;
    assert_eq!(headers["x-request-id"], "abc-123");

    let (_, headers, _) = send(seeded_app(), get("/nope")).await;
    let generated = headers["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}

fn post_with_content_type(content_type: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/generate-fingerprint");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn test_non_json_content_type_is_read_as_empty_object() {
    for content_type in [Some("text/plain"), None] {
        let recorder = Arc::new(RecordingGenerator::default());
        let (status, _, response) = send(
            app_with(recorder.clone()),
            post_with_content_type(content_type, generate_body(vec!["en"])),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{content_type:?}");
        assert_eq!(response, json!({ "error": "All inputs must be arrays." }));
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn test_json_content_type_with_charset_is_parsed() {
    let (status, _, _) = send(
        seeded_app(),
        post_with_content_type(
            Some("application/json; charset=utf-8"),
            generate_body(vec!["en"]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_timeout_answers_json_408() {
    let config = ServerConfig {
        timeout_secs: 0,
        ..ServerConfig::default()
    };
    let state = Arc::new(ServerState::with_generator(
        config,
        Arc::new(FingerprintGenerator::with_seed(1)),
    ));
    let app = Router::new()
        .route(
            "/slow",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "late"
            }),
        )
        .layer(from_fn_with_state(state, request_timeout));

    let (status, _, body) = send(app, get("/slow")).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body, json!({ "error": "Request timed out after 0s" }));
}
