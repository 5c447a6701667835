//! # Simulation Endpoint
//!
//! ## User Workflow
//! ```text
//! Front end form ──► POST /api/simulate { monthly_invoice_volume: 1000, ... }
//!      │
//!      ▼
//! validate_simulation_inputs()
//!      │
//!      ├── missing/falsy field ──► 400 { error }
//!      │
//!      ▼
//! compute() ──► 200 { results: { monthly_savings, ..., roi_percentage } }
//! ```
//!
//! Nothing is stored.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use roi_core::validation::validate_simulation_inputs;
use roi_core::{compute, BusinessInputs, RoiResults};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::into_record;
use crate::error::ApiError;
use crate::state::AppState;

/// Response of a simulation.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub results: RoiResults,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/simulate", post(simulate))
}

async fn simulate(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let record = into_record(body)?;
    validate_simulation_inputs(&record)?;

    let results = compute(&BusinessInputs::from_record(&record));
    debug!(roi = %results.roi_percentage, "Simulation computed");

    Ok(Json(SimulateResponse { results }))
}
