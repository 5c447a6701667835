//! # Report Endpoint
//!
//! ## User Workflow
//! ```text
//! POST /api/report/generate { scenario_id, email }
//!      │
//!      ├── either field missing ──► 400
//!      │
//!      ▼
//! log "Lead captured" (email is not stored)
//!      │
//!      ▼
//! db.scenarios().get(id) ──► 404 if unknown
//!      │
//!      ▼
//! reports.generate(scenario) ──► 200 { download_url: "/reports/<id>.pdf" }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use roi_core::validation::validate_report_request;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::into_record;
use crate::error::ApiError;
use crate::state::AppState;

/// Where the generated report can be fetched.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub download_url: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/report/generate", post(generate_report))
}

async fn generate_report(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReportResponse>, ApiError> {
    let record = into_record(body)?;
    let (scenario_id, email) = validate_report_request(&record)?;

    info!(email = %email, scenario_id = %scenario_id, "Lead captured");

    let scenario = state.db.scenarios().get(&scenario_id).await?;
    let download_url = state.reports.generate(&scenario).await?;

    Ok(Json(ReportResponse { download_url }))
}
