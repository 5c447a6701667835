//! # Report Store
//!
//! Files rendered reports under the public reports directory.
//!
//! ## Atomic Replacement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two requests render the same scenario at once                         │
//! │                                                                         │
//! │  request A ──► .<id>.<uuid-a>.tmp ──┐                                  │
//! │                                      ├── rename ──► <id>.pdf            │
//! │  request B ──► .<id>.<uuid-b>.tmp ──┘                                  │
//! │                                                                         │
//! │  Each writer has its own temp file; rename swaps the whole file in.    │
//! │  A reader sees A's bytes or B's bytes, never a mix of both.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Local;
use roi_core::Scenario;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::content::ReportContent;
use crate::error::{ReportError, ReportResult};
use crate::render::render_pdf;

/// URL prefix under which the reports directory is served.
pub const REPORTS_URL_PREFIX: &str = "/reports";

/// Owns the reports directory.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    /// Creates a store rooted at `dir`. Nothing is touched until
    /// [`ReportStore::ensure_dir`] or a save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReportStore { dir: dir.into() }
    }

    /// The reports directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the reports directory if it is missing.
    pub async fn ensure_dir(&self) -> ReportResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Path of the report for `scenario_id`.
    pub fn path_for(&self, scenario_id: &str) -> PathBuf {
        self.dir.join(format!("{}.pdf", scenario_id))
    }

    /// Download URL of the report for `scenario_id`.
    pub fn url_for(scenario_id: &str) -> String {
        format!("{}/{}.pdf", REPORTS_URL_PREFIX, scenario_id)
    }

    /// Writes `bytes` as the report for `scenario_id`, replacing any earlier
    /// one, and returns its download URL.
    pub async fn save(&self, scenario_id: &str, bytes: &[u8]) -> ReportResult<String> {
        check_file_stem(scenario_id)?;
        self.ensure_dir().await?;

        let target = self.path_for(scenario_id);
        let temp = self
            .dir
            .join(format!(".{}.{}.tmp", scenario_id, Uuid::new_v4()));

        if let Err(e) = write_then_rename(&temp, &target, bytes).await {
            // Best effort: the temp file may not exist
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        debug!(path = %target.display(), size = bytes.len(), "Report written");
        Ok(Self::url_for(scenario_id))
    }

    /// Renders and files the report for a scenario.
    ///
    /// ## User Workflow
    /// ```text
    /// POST /api/report/generate { scenario_id, email }
    ///      │
    ///      ▼
    /// db.scenarios().get(id)
    ///      │
    ///      ▼
    /// generate() ← THIS FUNCTION
    ///      ├── ReportContent::from_scenario
    ///      ├── render_pdf
    ///      └── save → "/reports/<id>.pdf"
    /// ```
    pub async fn generate(&self, scenario: &Scenario) -> ReportResult<String> {
        let content = ReportContent::from_scenario(scenario, Local::now());
        let bytes = render_pdf(&content)?;
        let url = self.save(&scenario.id, &bytes).await?;

        info!(scenario_id = %scenario.id, url = %url, "Report generated");
        Ok(url)
    }
}

async fn write_then_rename(temp: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    tokio::fs::write(temp, bytes).await?;
    tokio::fs::rename(temp, target).await
}

/// Rejects ids that would escape the reports directory.
fn check_file_stem(scenario_id: &str) -> ReportResult<()> {
    let invalid = scenario_id.is_empty()
        || scenario_id.starts_with('.')
        || scenario_id.contains(['/', '\\']);

    if invalid {
        return Err(ReportError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid report name: '{}'", scenario_id),
        )));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
