//! # Error Types
//!
//! Domain-specific error types for roi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  roi-core errors (this file)                                           │
//! │  ├── CoreError        - Malformed domain values                        │
//! │  └── ValidationError  - Missing required request fields                │
//! │                                                                         │
//! │  roi-db errors        └── DbError      - Store failures                │
//! │  roi-report errors    └── ReportError  - Render / write failures       │
//! │  roi-server errors    └── ApiError     - What HTTP callers see         │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → ApiError → {"error": "..."}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculation itself never fails: division by zero and negative values
//! propagate as ordinary floating-point results.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while interpreting domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored ROI percentage string could not be parsed back.
    ///
    /// ## When This Occurs
    /// - The `results` blob of a scenario was edited outside the application
    /// - The value is neither `"Infinite"` nor a number followed by `%`
    #[error("Invalid ROI percentage: '{0}'")]
    InvalidRoiPercentage(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Request validation errors.
///
/// Only presence is ever checked. Values that are present but nonsensical
/// (negative numbers, non-numeric strings) pass through untouched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more of the projection inputs are missing or falsy.
    #[error("Missing required inputs: {}", fields.join(", "))]
    MissingInputs { fields: Vec<String> },

    /// A single required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

impl ValidationError {
    /// Creates a Required error for the given field name.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
