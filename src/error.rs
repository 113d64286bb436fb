use std::path::PathBuf;
use thiserror::Error;

/// The main error type for glomscore operations.
#[derive(Debug, Error)]
pub enum GlomscoreError {
    #[error("total must be greater than zero")]
    ZeroTotal,

    #[error("sclerosed count {successes} exceeds total {total}")]
    OutOfRange { successes: u64, total: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse annotation JSON from {path}: {source}")]
    AnnotationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write CSV report to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to render JSON report: {0}")]
    ReportJson(#[source] serde_json::Error),
}
