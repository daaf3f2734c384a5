use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Environment variable prefix for structured overrides,
/// e.g. `BROWSERPRINT_SERVER__TIMEOUT_SECS=10`.
pub const ENV_PREFIX: &str = "BROWSERPRINT_SERVER";

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port (the plain `PORT` variable wins over every other source)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum JSON request body size in KiB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level / `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for reproducible fingerprints; random per request when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the config file, prefixed environment
    /// variables and finally `PORT`.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with_port(std::env::var("PORT").ok())
    }

    /// Same as [`ServerConfig::load`] with an explicit `PORT` value.
    ///
    /// A blank `PORT` counts as unset.
    pub fn load_with_port(port: Option<String>) -> anyhow::Result<Self> {
        let port = port.filter(|port| !port.trim().is_empty());

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let builder = match port {
            Some(port) => {
                let port: u16 = port
                    .trim()
                    .parse()
                    .map_err(|err| anyhow::anyhow!("invalid PORT '{port}': {err}"))?;
                builder.set_override("port", i64::from(port))?
            }
            None => builder,
        };

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    100
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
