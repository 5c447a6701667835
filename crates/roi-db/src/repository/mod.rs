//! # Repository Module
//!
//! Database repository implementations.
//!
//! ```text
//! HTTP handler
//!      │  db.scenarios().get(&id)
//!      ▼
//! ScenarioRepository
//! ├── create(&self, name, inputs)
//! ├── list(&self)
//! ├── get(&self, id)
//! ├── delete(&self, id)
//! └── count(&self)
//!      │  SQL
//!      ▼
//! SQLite
//! ```

pub mod scenario;
