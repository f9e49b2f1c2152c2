use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveillanceError {
    #[error("case log I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corrupt case log at line {line}: {source}")]
    CorruptLog {
        line: usize,
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
