//! # roi-server: HTTP API for the ROI Calculator
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         roi-server                                      │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  simulate      │  │  scenarios     │  │  report                    ││
//! │  │                │  │                │  │                            ││
//! │  │ • POST simulate│  │ • POST / GET   │  │ • POST report/generate     ││
//! │  │                │  │ • GET / DELETE │  │                            ││
//! │  │                │  │   by id        │  │                            ││
//! │  └───────┬────────┘  └───────┬────────┘  └─────────────┬──────────────┘│
//! │          │                   │                         │               │
//! │          ▼                   ▼                         ▼               │
//! │      roi-core            roi-db (SQLite)          roi-report (PDF)     │
//! │                                                                         │
//! │  Static: ./public (front end) · ./public/reports (generated PDFs)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config::ServerConfig`] for the environment variables.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,roi=debug,sqlx=warn";

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
