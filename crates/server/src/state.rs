use crate::config::ServerConfig;
use crate::directory::{EventDirectory, InMemoryDirectory};
use crate::error::{ServerError, ServerResult};
use std::sync::Arc;
use volmatch::{MatchEngine, MatchPolicy};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Matching engine (shared across requests)
    pub engine: Arc<MatchEngine>,

    /// User/event directory the suggest routes rank over
    pub directory: Arc<dyn EventDirectory>,
}

impl ServerState {
    /// Create new server state with the default scoring policy and the
    /// demo-seeded in-memory directory.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Self::with_directory(config, InMemoryDirectory::with_demo_data().into_shared())
    }

    /// Create server state over an explicit directory implementation.
    pub fn with_directory(
        config: ServerConfig,
        directory: Arc<dyn EventDirectory>,
    ) -> ServerResult<Self> {
        let engine = MatchEngine::new(MatchPolicy::default())
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            directory,
        })
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
