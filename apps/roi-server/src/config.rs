//! Server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default              |
//! |--------------------------|----------------------|
//! | `ROI_HOST`               | `0.0.0.0`            |
//! | `ROI_PORT`               | `3000`               |
//! | `ROI_DATABASE_PATH`      | `./scenarios.db`     |
//! | `ROI_PUBLIC_DIR`         | `./public`           |
//! | `ROI_REPORTS_DIR`        | `<public>/reports`   |
//! | `ROI_DB_MAX_CONNECTIONS` | `5`                  |

use std::env;
use std::path::PathBuf;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Root of the static front end
    pub public_dir: PathBuf,

    /// Where generated PDFs are written (served at `/reports`)
    pub reports_dir: PathBuf,

    /// Pool size for the scenario store
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let public_dir = PathBuf::from(lookup("ROI_PUBLIC_DIR").unwrap_or_else(|| "./public".to_string()));

        let config = ServerConfig {
            host: lookup("ROI_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("ROI_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ROI_PORT".to_string()))?,

            database_path: PathBuf::from(
                lookup("ROI_DATABASE_PATH").unwrap_or_else(|| "./scenarios.db".to_string()),
            ),

            reports_dir: lookup("ROI_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| public_dir.join("reports")),

            public_dir,

            db_max_connections: lookup("ROI_DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ROI_DB_MAX_CONNECTIONS".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("ROI_DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// `host:port` to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
