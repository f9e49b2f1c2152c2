use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Upper bound of the additive triage score.
pub const MAX_TRIAGE_SCORE: u8 = 10;

/// Categorical urgency guiding how quickly a patient must be seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum TriageLevel {
    Green,
    Yellow,
    Red,
}

impl TriageLevel {
    /// Map a triage score to its level: 7 and above is RED, 4 to 6 is YELLOW.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 7 => TriageLevel::Red,
            s if s >= 4 => TriageLevel::Yellow,
            _ => TriageLevel::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriageLevel::Green => "GREEN",
            TriageLevel::Yellow => "YELLOW",
            TriageLevel::Red => "RED",
        }
    }

    /// Short label shown on the triage badge.
    pub fn badge(&self) -> &'static str {
        match self {
            TriageLevel::Green => "Routine",
            TriageLevel::Yellow => "Priority",
            TriageLevel::Red => "Urgent",
        }
    }
}

impl FromStr for TriageLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GREEN" => Ok(TriageLevel::Green),
            "YELLOW" => Ok(TriageLevel::Yellow),
            "RED" => Ok(TriageLevel::Red),
            _ => Err(CoreError::UnknownTriageLevel(s.to_string())),
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 0–10 severity score and the level derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageScore {
    pub score: u8,
    pub level: TriageLevel,
}

impl TriageScore {
    /// Cap a raw additive total at [`MAX_TRIAGE_SCORE`] and derive the level.
    pub fn from_total(total: u32) -> Self {
        let score = total.min(u32::from(MAX_TRIAGE_SCORE)) as u8;
        Self {
            score,
            level: TriageLevel::from_score(score),
        }
    }
}
