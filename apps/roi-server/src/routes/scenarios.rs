//! # Scenario Endpoints
//!
//! Create, list, fetch and delete saved scenarios.
//!
//! ## DTO Pattern
//! ```text
//! Scenario (roi-core)              ScenarioDetail (wire)
//! ───────────────────              ─────────────────────
//! id, name, inputs, results   ──►  id, name, inputs, results
//! created_at                       (not exposed)
//! ```

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use roi_core::validation::{validate_scenario_name, SCENARIO_NAME};
use roi_core::{RoiResults, Scenario, ScenarioSummary};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::into_record;
use crate::error::ApiError;
use crate::state::AppState;

/// Full scenario as returned by `GET /api/scenarios/{id}`.
#[derive(Debug, Serialize)]
pub struct ScenarioDetail {
    pub id: String,
    pub name: String,
    pub inputs: Value,
    pub results: RoiResults,
}

impl From<Scenario> for ScenarioDetail {
    fn from(scenario: Scenario) -> Self {
        ScenarioDetail {
            id: scenario.id,
            name: scenario.name,
            inputs: scenario.inputs,
            results: scenario.results,
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/scenarios", get(list_scenarios).post(create_scenario))
        .route(
            "/api/scenarios/{id}",
            get(get_scenario).delete(delete_scenario),
        )
}

/// `POST /api/scenarios`: stores the body (minus `scenario_name`) as a new
/// scenario.
async fn create_scenario(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScenarioSummary>, ApiError> {
    let mut record = into_record(body)?;
    let name = validate_scenario_name(&record)?;
    record.shift_remove(SCENARIO_NAME);

    let scenario = state.db.scenarios().create(&name, &record).await?;
    info!(id = %scenario.id, name = %scenario.name, "Scenario saved");

    Ok(Json(scenario.summary()))
}

async fn list_scenarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScenarioSummary>>, ApiError> {
    let scenarios = state.db.scenarios().list().await?;
    Ok(Json(scenarios))
}

async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScenarioDetail>, ApiError> {
    let scenario = state.db.scenarios().get(&id).await?;
    Ok(Json(ScenarioDetail::from(scenario)))
}

async fn delete_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.db.scenarios().delete(&id).await?;
    debug!(id = %id, "Scenario deleted");

    Ok(Json(DeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    fn scenario_body(name: &str) -> Value {
        json!({
            "scenario_name": name,
            "monthly_invoice_volume": 1000,
            "avg_hours_per_invoice": 0.5,
            "hourly_wage": 25,
            "error_rate_manual": 2,
            "error_cost": 50,
            "time_horizon_months": 12,
        })
    }

    #[tokio::test]
    async fn test_create_and_fetch() {
        let (app, _public) = test_app().await;

        let (status, created) = send(&app, post_json("/api/scenarios", &scenario_body("Q3"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], json!("Q3"));
        let id = created["id"].as_str().unwrap().to_string();

        let (status, detail) = send(&app, get(&format!("/api/scenarios/{}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["id"], json!(id));
        assert_eq!(detail["name"], json!("Q3"));
        assert_eq!(detail["results"]["monthly_savings"], json!(14575));
        assert_eq!(detail["results"]["roi_percentage"], json!("249.8%"));
        assert!(detail["inputs"].get("scenario_name").is_none());
        assert_eq!(detail["inputs"]["hourly_wage"], json!(25));
        assert!(detail.get("created_at").is_none());
    }

    #[tokio::test]
    async fn test_missing_name_is_bad_request() {
        let (app, _public) = test_app().await;

        let mut body = scenario_body("");
        let (status, error) = send(&app, post_json("/api/scenarios", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error, json!({ "error": "scenario_name is required" }));

        body.as_object_mut().unwrap().remove("scenario_name");
        let (status, _) = send(&app, post_json("/api/scenarios", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_whitespace_name_is_accepted() {
        let (app, _public) = test_app().await;

        let (status, created) = send(&app, post_json("/api/scenarios", &scenario_body("   "))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], json!("   "));

        let uri = format!("/api/scenarios/{}", created["id"].as_str().unwrap());
        let (status, detail) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["name"], json!("   "));
    }

    #[tokio::test]
    async fn test_stored_inputs_keep_request_order() {
        let (app, _public) = test_app().await;

        let (_, created) = send(&app, post_json("/api/scenarios", &scenario_body("Order"))).await;
        let uri = format!("/api/scenarios/{}", created["id"].as_str().unwrap());
        let (_, detail) = send(&app, get(&uri)).await;

        let keys: Vec<&str> = detail["inputs"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            [
                "monthly_invoice_volume",
                "avg_hours_per_invoice",
                "hourly_wage",
                "error_rate_manual",
                "error_cost",
                "time_horizon_months",
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicate_name_is_server_error_and_first_survives() {
        let (app, _public) = test_app().await;

        let (_, first) = send(&app, post_json("/api/scenarios", &scenario_body("Dup"))).await;
        let (status, error) = send(&app, post_json("/api/scenarios", &scenario_body("Dup"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error["error"], json!("Duplicate name: 'Dup' already exists"));

        let uri = format!("/api/scenarios/{}", first["id"].as_str().unwrap());
        let (status, _) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, list) = send(&app, get("/api/scenarios")).await;
        assert_eq!(list.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_list() {
        let (app, _public) = test_app().await;

        let (status, empty) = send(&app, get("/api/scenarios")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(empty, json!([]));

        let (_, a) = send(&app, post_json("/api/scenarios", &scenario_body("A"))).await;
        let (_, b) = send(&app, post_json("/api/scenarios", &scenario_body("B"))).await;

        let (_, list) = send(&app, get("/api/scenarios")).await;
        let list = list.as_array().unwrap().clone();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&a));
        assert!(list.contains(&b));
    }

    #[tokio::test]
    async fn test_delete_then_fetch_and_delete_again() {
        let (app, _public) = test_app().await;

        let (_, created) = send(&app, post_json("/api/scenarios", &scenario_body("Gone"))).await;
        let uri = format!("/api/scenarios/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, delete(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("not found"));

        let (status, _) = send(&app, delete(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (app, _public) = test_app().await;

        let (status, body) = send(&app, get("/api/scenarios/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Scenario not found: nope" }));
    }
}
