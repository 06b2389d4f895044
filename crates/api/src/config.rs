//! Application configuration loaded from environment variables.

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    ///
    /// A `PORT` that is set but not a valid port number is rejected rather
    /// than silently replaced by the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_level: log_level_from_lookup(&lookup),
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads the tracing filter directive on its own.
///
/// Independent of [`Config::from_env`] so logging can honour `RUST_LOG` even
/// when the rest of the configuration is rejected.
pub fn log_level_from_env() -> String {
    log_level_from_lookup(&|key: &str| std::env::var(key).ok())
}

fn log_level_from_lookup<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
