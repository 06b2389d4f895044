//! Startup and configuration errors.
//!
//! Request handling has no error path of its own: unmatched routes and
//! methods are answered by the router's default 404/405 responses.

use std::num::ParseIntError;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set to something that is not a valid port number.
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The listener could not bind to the configured address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("Metrics recorder error: {0}")]
    Metrics(#[from] BuildError),
}

/// Result type for server startup.
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:80".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("Failed to bind 0.0.0.0:80"));
    }

    #[test]
    fn test_config_error_converts() {
        let source = "x".parse::<u16>().unwrap_err();
        let err: ServerError = ConfigError::InvalidPort {
            value: "x".to_string(),
            source,
        }
        .into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().contains("Invalid PORT value \"x\""));
    }
}
