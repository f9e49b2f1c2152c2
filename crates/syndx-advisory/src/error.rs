use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory provider is disabled")]
    Disabled,

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("advisory response was malformed: {0}")]
    Malformed(String),

    #[error("advisory timed out after {0:?}")]
    Timeout(Duration),
}
