use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Dashboard errors
// ---------------------------------------------------------------------------

/// Boxed cause of a failed resource read (I/O, CSV syntax, bad cell, ...).
pub type ReadCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the dashboard core.  All of them are fatal: they are
/// either startup failures or wiring defects, never user-input problems.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset or description resource is missing, unreadable or malformed.
    #[error("cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: ReadCause,
    },

    /// An axis label that the metric registry does not know.
    #[error("unknown metric label: {0:?}")]
    UnknownMetric(String),

    /// Two registry entries share a label or a column.
    #[error("duplicate metric registry key: {0:?}")]
    DuplicateMetric(&'static str),
}

impl DashboardError {
    pub fn file_read(path: impl Into<PathBuf>, source: impl Into<ReadCause>) -> Self {
        DashboardError::FileRead {
            path: path.into(),
            source: source.into(),
        }
    }
}
