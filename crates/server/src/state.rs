use crate::config::ServerConfig;
use browserprint::{FingerprintGenerator, GenerateFingerprint};
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and never mutated afterwards, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Generation capability (shared across requests)
    pub generator: Arc<dyn GenerateFingerprint>,
}

impl ServerState {
    /// Create server state with the default generator, seeded when the
    /// configuration asks for reproducible output
    pub fn new(config: ServerConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => FingerprintGenerator::with_seed(seed),
            None => FingerprintGenerator::new(),
        };
        Self::with_generator(config, Arc::new(generator))
    }

    /// Create server state around an injected generator
    pub fn with_generator(config: ServerConfig, generator: Arc<dyn GenerateFingerprint>) -> Self {
        Self {
            config: Arc::new(config),
            generator,
        }
    }
}

