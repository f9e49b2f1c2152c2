use syndx_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error(transparent)]
    Vocabulary(#[from] CoreError),

    #[error("age {0} is outside [0, 120]")]
    AgeOutOfRange(u32),

    #[error("pain level {0} is outside [0, 10]")]
    PainOutOfRange(u32),
}
