//! # Validation Module
//!
//! Presence checks for raw request records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (roi-server)                                    │
//! │  └── THIS MODULE: is every required field present and truthy?          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Scenario store (roi-db)                                      │
//! │  ├── name must not be blank                                            │
//! │  └── UNIQUE(name) constraint                                           │
//! │                                                                         │
//! │  Nothing checks types or ranges: a negative wage or a non-numeric      │
//! │  volume flows straight into the calculation.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Truthiness
//! A field counts as present when it is truthy: not absent, `null`,
//! `false`, `0`, `NaN` or `""`.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::format::display_value;
use crate::types::REQUIRED_INPUT_FIELDS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field carrying the scenario label on `POST /api/scenarios`.
pub const SCENARIO_NAME: &str = "scenario_name";

/// Field carrying the scenario id on `POST /api/report/generate`.
pub const SCENARIO_ID: &str = "scenario_id";

/// Field carrying the lead's address on `POST /api/report/generate`.
pub const EMAIL: &str = "email";

// =============================================================================
// Truthiness
// =============================================================================

/// Returns whether a raw field counts as present.
///
/// ## Example
/// ```rust
/// use roi_core::validation::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(Some(&json!(0.5))));
/// assert!(is_truthy(Some(&json!("0"))));
/// assert!(!is_truthy(Some(&json!(0))));
/// assert!(!is_truthy(Some(&json!(""))));
/// assert!(!is_truthy(None));
/// ```
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Returns the display text of a truthy field, or `Required` naming it.
pub fn require_text(record: &Map<String, Value>, field: &str) -> ValidationResult<String> {
    let value = record.get(field);
    if !is_truthy(value) {
        return Err(ValidationError::required(field));
    }
    Ok(display_value(value))
}

// =============================================================================
// Request Validators
// =============================================================================

/// Validates the body of a simulation request.
///
/// ## User Workflow
/// ```text
/// POST /api/simulate { monthly_invoice_volume: 1000, hourly_wage: 0, ... }
///      │
///      ▼
/// validate_simulation_inputs() ← THIS FUNCTION
///      │
///      ├── any required field falsy? → 400 "Missing required inputs: hourly_wage"
///      │
///      └── OK → compute()
/// ```
///
/// Every missing field is reported, in canonical order.
pub fn validate_simulation_inputs(record: &Map<String, Value>) -> ValidationResult<()> {
    let missing: Vec<String> = REQUIRED_INPUT_FIELDS
        .iter()
        .filter(|field| !is_truthy(record.get(**field)))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingInputs { fields: missing })
    }
}

/// Validates a scenario-creation body and returns the scenario name.
pub fn validate_scenario_name(record: &Map<String, Value>) -> ValidationResult<String> {
    require_text(record, SCENARIO_NAME)
}

/// Validates a report request and returns `(scenario_id, email)`.
///
/// Both fields are checked before either is used; the first missing one is
/// reported.
pub fn validate_report_request(record: &Map<String, Value>) -> ValidationResult<(String, String)> {
    let scenario_id = require_text(record, SCENARIO_ID)?;
    let email = require_text(record, EMAIL)?;
    Ok((scenario_id, email))
}

// =============================================================================
// Unit Tests
// =============================================================================
