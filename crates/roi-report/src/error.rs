//! Report error types.

use thiserror::Error;

/// Errors raised while producing or filing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF library rejected the document.
    #[error("Failed to render report: {0}")]
    Render(String),

    /// The reports directory could not be written.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Wraps a PDF library failure.
    pub fn render(err: impl std::fmt::Display) -> Self {
        ReportError::Render(err.to_string())
    }
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
