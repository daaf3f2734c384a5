//! browserprint-server - HTTP JSON API for synthetic browser fingerprints
//!
//! Reads `.env` when present, then configuration from `server.*`,
//! `BROWSERPRINT_SERVER__*` variables and `PORT`.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
