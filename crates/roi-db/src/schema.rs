//! # Schema Setup
//!
//! The scenario store is a single table, created on startup.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Process                                     │
//! │                                                                         │
//! │  Database::new()                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS scenarios                                  │
//! │       │                                                                 │
//! │       ├── table missing?  → created                                    │
//! │       └── table present?  → left untouched (data survives restarts)    │
//! │                                                                         │
//! │  There is no versioning: the layout below is the only one.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Table Layout
//! ```text
//! scenarios
//! ├── id          TEXT PRIMARY KEY    UUID v4
//! ├── name        TEXT UNIQUE         display label
//! ├── inputs      TEXT                raw input record (JSON)
//! ├── results     TEXT                computed results (JSON)
//! └── created_at  DATETIME            set by the database
//! ```

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// DDL for the scenarios table.
pub const CREATE_SCENARIOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS scenarios (
    id TEXT PRIMARY KEY,
    name TEXT UNIQUE,
    inputs TEXT,
    results TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Creates the schema if it does not exist yet.
///
/// Idempotent: safe to run on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(CREATE_SCENARIOS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::SchemaFailed(e.to_string()))?;

    info!("Scenario schema ready");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
