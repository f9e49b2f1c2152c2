use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("unknown risk factor: {0}")]
    UnknownRisk(String),

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("unknown HIV status: {0}")]
    UnknownHivStatus(String),

    #[error("unknown triage level: {0}")]
    UnknownTriageLevel(String),
}
