use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::syndrome::merge_diagnosis;

/// Marker for a field the advisory could not supply.
pub const PLACEHOLDER: &str = "—";

/// Probable diagnosis reported when the advisory is absent or malformed.
pub const UNAVAILABLE_DIAGNOSIS: &str = "AI parsing issue";

/// Patient message used when the advisory supplies none.
pub const UNAVAILABLE_PATIENT_MESSAGE: &str = "Return if symptoms worsen.";

/// The advisory provider's self-reported confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Parse case-insensitively. Returns `None` for anything outside the
    /// three known labels.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }

    /// Percentage shown next to the advisory column.
    pub fn display_percent(&self) -> &'static str {
        match self {
            Confidence::Low => "40%",
            Confidence::Medium => "70%",
            Confidence::High => "90%",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supplementary, non-authoritative suggestion from an external provider.
///
/// Its treatment and labs are informational; the deterministic
/// [`SyndromicResult`](super::syndrome::SyndromicResult) is always the
/// treatment of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdvisoryResult {
    pub probable: String,
    pub possible: String,
    pub treatment: String,
    pub labs: String,
    pub confidence: Confidence,
    pub patient_message: String,
}

impl AdvisoryResult {
    /// Safe default substituted when the advisory is unavailable.
    pub fn unavailable() -> Self {
        Self {
            probable: UNAVAILABLE_DIAGNOSIS.to_string(),
            possible: PLACEHOLDER.to_string(),
            treatment: PLACEHOLDER.to_string(),
            labs: PLACEHOLDER.to_string(),
            confidence: Confidence::Low,
            patient_message: UNAVAILABLE_PATIENT_MESSAGE.to_string(),
        }
    }

    pub fn merged_diagnosis(&self) -> String {
        merge_diagnosis(&self.probable, &self.possible)
    }

    /// True when the diagnosis carries no usable content.
    pub fn is_placeholder(&self) -> bool {
        self.probable == UNAVAILABLE_DIAGNOSIS
            || self.possible == PLACEHOLDER
            || self.merged_diagnosis() == PLACEHOLDER
    }
}
