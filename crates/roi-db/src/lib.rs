//! # roi-db: Scenario Store for the ROI Calculator
//!
//! Persists named scenarios (raw inputs plus a snapshot of their results)
//! in SQLite through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ROI Calculator Data Flow                         │
//! │                                                                         │
//! │  HTTP handler (POST /api/scenarios)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     roi-db (THIS CRATE)                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │  ScenarioRepository │  │   Schema   │  │   │
//! │  │   │   (pool.rs)   │◄───│  create / list /    │  │ (schema.rs)│  │   │
//! │  │   │  SqlitePool   │    │  get / delete       │  │ scenarios  │  │   │
//! │  │   └───────────────┘    └────────────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 SQLite Database (./scenarios.db)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Table creation on startup
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roi_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./scenarios.db")).await?;
//! let scenario = db.scenarios().create("Q3 plan", &record).await?;
//! let all = db.scenarios().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::scenario::ScenarioRepository;
