//! # Health Endpoint
//!
//! `GET /api/health` reports whether the scenario store answers queries.
//! Monitoring and load balancers poll it; it never touches report files.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Serving status of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingStatus {
    Serving,
    NotServing,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServingStatus,
    pub message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if state.db.health_check().await {
        let body = HealthResponse {
            status: ServingStatus::Serving,
            message: "Database connection healthy".to_string(),
        };
        (StatusCode::OK, Json(body))
    } else {
        warn!("Health check failed: database unreachable");
        let body = HealthResponse {
            status: ServingStatus::NotServing,
            message: "Database unhealthy".to_string(),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::super::build_router;
    use super::super::test_support::*;
    use crate::state::AppState;
    use axum::http::StatusCode;
    use roi_db::{Database, DbConfig};
    use roi_report::ReportStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_healthy_store_is_serving() {
        let (app, _public) = test_app().await;

        let (status, body) = send(&app, get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("serving"));
    }

    #[tokio::test]
    async fn test_closed_store_is_unavailable() {
        let public = tempfile::tempdir().unwrap();
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let reports = ReportStore::new(public.path().join("reports"));
        let app = build_router(AppState::new(db.clone(), reports), public.path());

        db.close().await;

        let (status, body) = send(&app, get("/api/health")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], json!("not_serving"));
    }
}
