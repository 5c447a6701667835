//! # roi-report: Scenario Reports
//!
//! Produces the downloadable PDF for a saved scenario.
//!
//! ## Pipeline
//! ```text
//! Scenario ──► ReportContent ──► render_pdf ──► bytes ──► ReportStore ──► "/reports/<id>.pdf"
//!              (content.rs)      (render.rs)              (store.rs)
//! ```
//!
//! Rendering is pure; only the store touches the file system.

pub mod content;
pub mod error;
pub mod render;
pub mod store;

pub use content::{LineStyle, ReportContent};
pub use error::{ReportError, ReportResult};
pub use render::render_pdf;
pub use store::ReportStore;
