//! Application state shared across handlers.

use std::sync::Arc;

use bookshelf_store::BookStore;

use crate::auth::{CredentialCheck, StaticApiKey};
use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Book catalog store.
    store: Arc<BookStore>,
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// Credential check guarding the /api routes.
    gate: Arc<dyn CredentialCheck>,
}

impl AppState {
    /// Create new application state.
    ///
    /// The gate is the static API-key check against the configured secret;
    /// handlers only ever see it through the `CredentialCheck` trait.
    pub fn new(store: BookStore, config: ServerConfig) -> Self {
        let gate = StaticApiKey::new(config.api_key.clone());
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            gate: Arc::new(gate),
        }
    }

    /// Get a reference to the book store.
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get a reference to the credential gate.
    pub fn gate(&self) -> &dyn CredentialCheck {
        self.gate.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
