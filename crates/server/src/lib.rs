//! browserprint-server - HTTP JSON API for synthetic browser fingerprints
//!
//! This crate exposes the `browserprint` generator over HTTP. The generator
//! is held behind [`browserprint::GenerateFingerprint`], so tests and
//! embedders can swap in their own implementation via
//! [`ServerState::with_generator`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness check
//! - `GET /fingerprint` - Fingerprint for desktop Chrome, English locales
//! - `GET /configurations/{locales}/{browsers}/{devices}` - Echo of the
//!   comma-separated path segments
//! - `POST /generate-fingerprint` - Fingerprint under caller constraints
//!
//! Errors are JSON objects of the form `{"error": "...", "details": "..."}`,
//! with `details` present only when generation itself failed.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, serve, start_server};
pub use state::ServerState;
