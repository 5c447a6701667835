//! # Scenario Repository
//!
//! Database operations for saved scenarios.
//!
//! ## Key Operations
//! - Create (compute + snapshot results)
//! - List, get, delete
//!
//! ## Snapshot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    What Gets Stored                                     │
//! │                                                                         │
//! │  POST /api/scenarios { scenario_name: "Q3", hourly_wage: 25, ... }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create("Q3", record)                                                  │
//! │       │                                                                 │
//! │       ├── inputs  = record as supplied (JSON text)                     │
//! │       └── results = compute(record) at this moment (JSON text)         │
//! │                                                                         │
//! │  Reads return both blobs verbatim. Results are never recomputed, so    │
//! │  a later change to the calculation leaves old scenarios untouched.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use roi_core::validation::SCENARIO_NAME;
use roi_core::{compute, BusinessInputs, RoiResults, Scenario, ScenarioSummary, ValidationError};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{unique_violation, DbError, DbResult};

/// Entity label used in NotFound errors.
const ENTITY: &str = "Scenario";

/// Column whose UNIQUE constraint guards scenario names.
const NAME_COLUMN: &str = "scenarios.name";

/// Raw row as stored in SQLite.
#[derive(Debug, sqlx::FromRow)]
struct ScenarioRow {
    id: String,
    name: String,
    inputs: String,
    results: String,
    created_at: NaiveDateTime,
}

impl TryFrom<ScenarioRow> for Scenario {
    type Error = DbError;

    fn try_from(row: ScenarioRow) -> DbResult<Self> {
        let inputs: Value = serde_json::from_str(&row.inputs)?;
        let results: RoiResults = serde_json::from_str(&row.results)?;

        Ok(Scenario {
            id: row.id,
            name: row.name,
            inputs,
            results,
            created_at: row.created_at.and_utc(),
        })
    }
}

/// Repository for scenario database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.scenarios();
///
/// let created = repo.create("Baseline", &record).await?;
/// let loaded = repo.get(&created.id).await?;
/// repo.delete(&created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRepository {
    pool: SqlitePool,
}

impl ScenarioRepository {
    /// Creates a new ScenarioRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ScenarioRepository { pool }
    }

    /// Saves a new scenario.
    ///
    /// ## What This Does
    /// 1. Rejects an empty name
    /// 2. Generates a UUID v4
    /// 3. Computes results from the raw inputs
    /// 4. Stores inputs and results as JSON text
    ///
    /// ## Returns
    /// * `Ok(Scenario)` - The stored scenario, `created_at` included
    /// * `Err(DbError::UniqueViolation)` - Name already taken; nothing was written
    /// * `Err(DbError::Validation)` - Empty name
    pub async fn create(&self, name: &str, inputs: &Map<String, Value>) -> DbResult<Scenario> {
        if name.is_empty() {
            return Err(ValidationError::required(SCENARIO_NAME).into());
        }

        let id = Uuid::new_v4().to_string();
        let results = compute(&BusinessInputs::from_record(inputs));

        let inputs_json = serde_json::to_string(inputs)?;
        let results_json = serde_json::to_string(&results)?;

        debug!(id = %id, name = %name, "Creating scenario");

        sqlx::query("INSERT INTO scenarios (id, name, inputs, results) VALUES (?1, ?2, ?3, ?4)")
            .bind(&id)
            .bind(name)
            .bind(&inputs_json)
            .bind(&results_json)
            .execute(&self.pool)
            .await
            .map_err(|e| match unique_violation(&e) {
                Some(NAME_COLUMN) => DbError::duplicate("name", name),
                _ => DbError::from(e),
            })?;

        self.get(&id).await
    }

    /// Lists every scenario as an id/name pair.
    ///
    /// Oldest first; ties fall back to insertion order.
    pub async fn list(&self) -> DbResult<Vec<ScenarioSummary>> {
        let summaries = sqlx::query_as::<_, ScenarioSummary>(
            "SELECT id, name FROM scenarios ORDER BY created_at, rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = summaries.len(), "Listed scenarios");
        Ok(summaries)
    }

    /// Fetches one scenario by id.
    ///
    /// ## Returns
    /// * `Ok(Scenario)` - Stored inputs and snapshot results
    /// * `Err(DbError::NotFound)` - No scenario with this id
    pub async fn get(&self, id: &str) -> DbResult<Scenario> {
        debug!(id = %id, "Fetching scenario");

        let row = sqlx::query_as::<_, ScenarioRow>(
            "SELECT id, name, inputs, results, created_at FROM scenarios WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(ENTITY, id))?;

        Scenario::try_from(row)
    }

    /// Deletes one scenario by id.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - Nothing to remove (a second delete included)
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting scenario");

        let result = sqlx::query("DELETE FROM scenarios WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }

    /// Counts stored scenarios.
    pub async fn count(&self) -> DbResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scenarios")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use roi_core::RoiPercentage;
    use serde_json::json;

    async fn repo() -> ScenarioRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().scenarios()
    }

    fn reference_record() -> Map<String, Value> {
        json!({
            "monthly_invoice_volume": 1000,
            "avg_hours_per_invoice": 0.5,
            "hourly_wage": 25,
            "error_rate_manual": 2,
            "error_cost": 50,
            "time_horizon_months": 12,
            "one_time_implementation_cost": 50000,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = repo().await;

        let created = repo.create("Baseline", &reference_record()).await.unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.results.monthly_savings, 14575.0);
        assert_eq!(created.results.roi_percentage, RoiPercentage::Percent(249.8));

        let loaded = repo.get(&created.id).await.unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.inputs, Value::Object(reference_record()));
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let repo = repo().await;

        let a = repo.create("A", &reference_record()).await.unwrap();
        let b = repo.create("B", &reference_record()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected_and_first_survives() {
        let repo = repo().await;

        let first = repo.create("Q3", &reference_record()).await.unwrap();

        let mut other = reference_record();
        other.insert("hourly_wage".to_string(), json!(99));
        let err = repo.create("Q3", &other).await.unwrap_err();

        match err {
            DbError::UniqueViolation { field, value } => {
                assert_eq!(field, "name");
                assert_eq!(value, "Q3");
            }
            other => panic!("expected UniqueViolation, got {:?}", other),
        }

        assert_eq!(repo.count().await.unwrap(), 1);
        let kept = repo.get(&first.id).await.unwrap();
        assert_eq!(kept.inputs["hourly_wage"], json!(25));
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let repo = repo().await;

        let err = repo.create("", &reference_record()).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(err.to_string(), "scenario_name is required");
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_name_is_stored_as_given() {
        let repo = repo().await;

        let created = repo.create("   ", &reference_record()).await.unwrap();
        assert_eq!(created.name, "   ");
        assert_eq!(repo.get(&created.id).await.unwrap().name, "   ");
    }

    #[tokio::test]
    async fn test_inputs_keep_caller_key_order() {
        let repo = repo().await;
        let record = json!({
            "time_horizon_months": 12,
            "monthly_invoice_volume": 1000,
            "hourly_wage": 25,
            "avg_hours_per_invoice": 0.5,
        });

        let created = repo
            .create("Ordered", record.as_object().unwrap())
            .await
            .unwrap();
        let loaded = repo.get(&created.id).await.unwrap();

        let keys: Vec<&str> = loaded
            .inputs
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            [
                "time_horizon_months",
                "monthly_invoice_volume",
                "hourly_wage",
                "avg_hours_per_invoice",
            ]
        );
    }

    #[tokio::test]
    async fn test_list_returns_id_and_name() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        let a = repo.create("A", &reference_record()).await.unwrap();
        let b = repo.create("B", &reference_record()).await.unwrap();

        let list = repo.list().await.unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&a.summary()));
        assert!(list.contains(&b.summary()));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let repo = repo().await;

        let err = repo.get("does-not-exist").await.unwrap_err();
        assert_eq!(err.to_string(), "Scenario not found: does-not-exist");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = repo().await;
        let created = repo.create("Temp", &reference_record()).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        assert!(matches!(
            repo.get(&created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
        assert!(matches!(
            repo.delete(&created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_name_is_reusable_after_delete() {
        let repo = repo().await;

        let first = repo.create("Reuse", &reference_record()).await.unwrap();
        repo.delete(&first.id).await.unwrap();

        assert!(repo.create("Reuse", &reference_record()).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_finite_results_survive_storage() {
        let repo = repo().await;
        let mut record = reference_record();
        record.insert("hourly_wage".to_string(), json!("lots"));

        let created = repo.create("Broken", &record).await.unwrap();
        assert!(created.results.monthly_savings.is_nan());
        assert_eq!(created.results.roi_percentage.to_string(), "NaN%");
        assert_eq!(created.inputs["hourly_wage"], json!("lots"));
    }

    #[tokio::test]
    async fn test_stored_results_are_a_snapshot() {
        let repo = repo().await;
        let created = repo.create("Snapshot", &reference_record()).await.unwrap();

        // Reads return the stored blob, never a recomputation of the inputs
        sqlx::query("UPDATE scenarios SET results = ?1 WHERE id = ?2")
            .bind(r#"{"monthly_savings":1,"cumulative_savings":12,"net_savings":-49988,"payback_months":50000,"roi_percentage":"-100%"}"#)
            .bind(&created.id)
            .execute(&repo.pool)
            .await
            .unwrap();

        let loaded = repo.get(&created.id).await.unwrap();
        assert_eq!(loaded.results.monthly_savings, 1.0);
        assert_eq!(loaded.results.roi_percentage.to_string(), "-100%");
    }
}
