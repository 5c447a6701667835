//! # roi-core: Pure Business Logic for the Invoice ROI Calculator
//!
//! This crate holds the projection math and the record types that flow
//! between the store, the report renderer and the HTTP layer. It performs no
//! I/O of any kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice ROI Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    roi-server (axum)                            │   │
//! │  │   /api/simulate  /api/scenarios  /api/report/generate           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roi-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │   types    │  │ calculator │  │ validation │  │ format  │  │   │
//! │  │   │ Inputs     │  │ compute()  │  │ presence   │  │ grouped │  │   │
//! │  │   │ RoiResults │  │ rounding   │  │ checks     │  │ numbers │  │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                │                                   │                    │
//! │  ┌─────────────▼──────────────┐    ┌───────────────▼──────────────┐    │
//! │  │   roi-db (SQLite store)    │    │   roi-report (PDF renderer)  │    │
//! │  └────────────────────────────┘    └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inputs, results and scenario records
//! - [`calculator`] - The ROI projection itself
//! - [`validation`] - Presence checks on raw request records
//! - [`format`] - Number-to-text helpers shared by the API and the report
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use roi_core::{compute, BusinessInputs};
//!
//! let inputs = BusinessInputs {
//!     monthly_invoice_volume: 1000.0,
//!     avg_hours_per_invoice: 0.5,
//!     hourly_wage: 25.0,
//!     error_rate_manual: 2.0,
//!     error_cost: 50.0,
//!     time_horizon_months: 12.0,
//!     one_time_implementation_cost: Some(50000.0),
//!     num_ap_staff: None,
//! };
//!
//! let results = compute(&inputs);
//! assert_eq!(results.monthly_savings, 14575.0);
//! assert_eq!(results.roi_percentage.to_string(), "249.8%");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod format;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute;
pub use error::{CoreError, ValidationError};
pub use types::*;

// =============================================================================
// Projection Constants
// =============================================================================

/// Processing cost of one invoice once automated, in currency units.
pub const AUTOMATED_COST_PER_INVOICE: f64 = 0.20;

/// Error rate of the automated pipeline (0.1%), as a fraction.
pub const AUTOMATED_ERROR_RATE: f64 = 0.001;

/// Multiplier applied to every monthly savings figure.
///
/// ## Business Reason
/// Shifts each projection from conservative toward optimistic. It is applied
/// unconditionally, including when savings are negative.
pub const SAVINGS_BOOST_FACTOR: f64 = 1.1;

/// Implementation cost used when the caller does not supply one.
pub const DEFAULT_IMPLEMENTATION_COST: f64 = 50000.0;
