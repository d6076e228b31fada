//! bookshelf-server: HTTP API server for the book catalog
//!
//! This crate provides:
//! - REST endpoints for listing, fetching, creating, replacing and
//!   deleting books
//! - Static API-key authentication in front of every /api route
//! - JSON error responses with stable error codes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! The credential gate runs as an extractor before any handler logic; the
//! in-memory `BookStore` behind the handlers is the single source of truth
//! for resource state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookshelf_server::{config::ServerConfig, routes, state::AppState};
//! use bookshelf_store::BookStore;
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(BookStore::new(), config);
//! let app = routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use auth::{CredentialCheck, RequireApiKey, StaticApiKey};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use bookshelf_core;
pub use bookshelf_store;
