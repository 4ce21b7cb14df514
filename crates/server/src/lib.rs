//! volmatch Server - HTTP API for event match suggestions
//!
//! This crate provides an HTTP server that exposes the `volmatch` matching
//! engine via a small REST API. It supports:
//!
//! - **Match Suggestions**: Ranked, explainable event suggestions per user
//! - **Candidate Filtering**: Optional upcoming-only / distance / date-range
//!   narrowing before ranking
//! - **Health**: Liveness and readiness probes
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error responses with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
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
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metadata` - Server metadata
//! - `GET /matching/suggest?userId=<id>&limit=<n>` - Ranked suggestions
//! - `GET /matching/suggest/{userId}?limit=<n>` - Path-parameter variant

pub mod config;
pub mod directory;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use directory::{EventDirectory, InMemoryDirectory};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
