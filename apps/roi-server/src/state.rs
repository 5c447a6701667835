//! Shared application state.

use roi_db::Database;
use roi_report::ReportStore;

/// Handles every request needs. Cloned per request; clones share the pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub reports: ReportStore,
}

impl AppState {
    pub fn new(db: Database, reports: ReportStore) -> Self {
        AppState { db, reports }
    }
}
