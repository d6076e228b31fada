//! Server configuration from environment variables.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Shared secret expected in the X-API-KEY header.
    pub api_key: String,
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Directory for the daily-rolling log file; stderr-only when unset.
    pub log_dir: Option<PathBuf>,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional, so the server runs with no
    /// configuration at all:
    /// - `BOOKSHELF_API_KEY`: shared secret (default: "my-secret-key")
    /// - `PORT`: server port (default: 5000)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `LOG_DIR`: directory for the rolling log file (default: unset)
    /// - `CORS_ALLOWED_ORIGINS`: allowed CORS origins (default: "*")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            env::var("BOOKSHELF_API_KEY").unwrap_or_else(|_| "my-secret-key".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("not a valid port number: {}", raw),
            })?,
            Err(_) => 5000,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR").ok().map(PathBuf::from);

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            api_key,
            port,
            log_level,
            log_dir,
            cors_allowed_origins,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

// The shared secret must never reach the logs, so Debug elides it.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide, so everything touching them
    // lives in one test to keep it serial.
    #[test]
    fn test_from_env() {
        // SAFETY: This test is not run in parallel with other tests that
        // read these variables.
        unsafe {
            env::remove_var("BOOKSHELF_API_KEY");
            env::remove_var("PORT");
            env::remove_var("LOG_LEVEL");
            env::remove_var("LOG_DIR");
            env::remove_var("CORS_ALLOWED_ORIGINS");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.api_key, "my-secret-key");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert_eq!(config.cors_allowed_origins, "*");

        // SAFETY: as above.
        unsafe {
            env::set_var("BOOKSHELF_API_KEY", "another-secret");
            env::set_var("PORT", "8006");
            env::set_var("LOG_LEVEL", "debug");
            env::set_var("LOG_DIR", "/var/log/bookshelf");
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.api_key, "another-secret");
        assert_eq!(config.port, 8006);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/bookshelf")));

        // SAFETY: as above.
        unsafe { env::set_var("PORT", "not-a-port") };
        assert!(ServerConfig::from_env().is_err());

        // SAFETY: as above.
        unsafe {
            env::remove_var("BOOKSHELF_API_KEY");
            env::remove_var("PORT");
            env::remove_var("LOG_LEVEL");
            env::remove_var("LOG_DIR");
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ServerConfig {
            api_key: "super-secret".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_dir: None,
            cors_allowed_origins: "*".to_string(),
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            api_key: "k".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_dir: None,
            cors_allowed_origins: "*".to_string(),
        };
        let addr = config.socket_addr();
        assert_eq!(addr.port(), 5000);
        assert!(addr.ip().is_unspecified());
    }
}
