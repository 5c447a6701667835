//! # HTTP Routes
//!
//! ## Route Map
//! ```text
//! POST   /api/simulate          simulate::simulate
//! POST   /api/scenarios         scenarios::create_scenario
//! GET    /api/scenarios         scenarios::list_scenarios
//! GET    /api/scenarios/{id}    scenarios::get_scenario
//! DELETE /api/scenarios/{id}    scenarios::delete_scenario
//! POST   /api/report/generate   report::generate_report
//! GET    /api/health            health::health
//! GET    /reports/*             generated PDFs
//! GET    /*                     static front end
//! ```

pub mod health;
pub mod report;
pub mod scenarios;
pub mod simulate;

use std::path::Path;

use axum::extract::rejection::JsonRejection;
use axum::{Json, Router};
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let reports_dir = state.reports.dir().to_path_buf();

    Router::new()
        .merge(simulate::routes())
        .merge(scenarios::routes())
        .merge(report::routes())
        .merge(health::routes())
        .with_state(state)
        .nest_service(roi_report::store::REPORTS_URL_PREFIX, ServeDir::new(reports_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Turns a JSON body into a raw record.
///
/// ```text
/// no JSON content type   → empty record
/// malformed JSON         → 400
/// array / string / ...   → empty record
/// object                 → that object
/// ```
pub(crate) fn into_record(body: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, ApiError> {
    match body {
        Ok(Json(Value::Object(record))) => Ok(record),
        Ok(Json(_)) => Ok(Map::new()),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Map::new()),
        Err(rejection) => Err(rejection.into()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use roi_db::{Database, DbConfig};
    use roi_report::ReportStore;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::build_router;
    use crate::state::AppState;

    /// Router over an in-memory store and a temporary public directory.
    pub async fn test_app() -> (Router, TempDir) {
        let public = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let reports = ReportStore::new(public.path().join("reports"));

        let app = build_router(AppState::new(db, reports), public.path());
        (app, public)
    }

    /// Sends a request and returns the status and raw body.
    pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    /// Sends a request and parses the JSON body.
    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send_raw(app, request).await;
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn delete(uri: &str) -> Request<Body> {
        Request::delete(uri).body(Body::empty()).unwrap()
    }
}
