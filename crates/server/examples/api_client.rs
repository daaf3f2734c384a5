//! Walk through every browserprint-server endpoint.
//!
//! Start the server first (`cargo run -p browserprint-server`), then run
//! `cargo run -p browserprint-server --example api_client`. Set
//! `SERVER_URL` to target another host.

use reqwest::Client;
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let server_url =
        std::env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{server_url}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Default fingerprint
    println!("2. Default Fingerprint:");
    let resp = client.get(format!("{server_url}/fingerprint")).send().await?;
    println!("Status: {}", resp.status());
    let body: Value = resp.json().await?;
    println!("User-Agent: {}", body["navigator"]["userAgent"]);
    println!();

    // Example 3: Configuration echo
    println!("3. Configuration Echo:");
    let resp = client
        .get(format!("{server_url}/configurations/en-US,de/chrome,firefox/desktop"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Constrained fingerprint
    println!("4. Generate Fingerprint (Firefox on Linux, German):");
    let resp = client
        .post(format!("{server_url}/generate-fingerprint"))
        .json(&json!({
            "browsers": ["firefox"],
            "operatingSystems": ["linux"],
            "devices": ["desktop"],
            "locales": ["de-DE", "de", "en"]
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: Value = resp.json().await?;
    println!("User-Agent: {}", body["navigator"]["userAgent"]);
    println!("Languages: {}", body["navigator"]["languages"]);
    println!(
        "Screen: {}x{}",
        body["screen"]["width"], body["screen"]["height"]
    );
    println!();

    // Example 5: Validation failure
    println!("5. Validation Failure (string instead of array):");
    let resp = client
        .post(format!("{server_url}/generate-fingerprint"))
        .json(&json!({
            "browsers": "chrome",
            "operatingSystems": [],
            "devices": [],
            "locales": []
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Impossible combination
    println!("6. Generation Failure (Safari on Windows):");
    let resp = client
        .post(format!("{server_url}/generate-fingerprint"))
        .json(&json!({
            "browsers": ["safari"],
            "operatingSystems": ["windows"],
            "devices": [],
            "locales": ["en-US"]
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
