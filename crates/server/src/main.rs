//! volmatch Server - HTTP API for event match suggestions
//!
//! This binary serves ranked volunteer-event suggestions over a small REST
//! API backed by the `volmatch` matching engine.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env in development; harmless when absent
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
