use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::symptom::{RiskTag, SymptomTag};
use crate::error::CoreError;

/// Occupation recorded for cases logged before the field existed.
pub const DEFAULT_OCCUPATION: &str = "Not Specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Female" => Ok(Sex::Female),
            "Male" => Ok(Sex::Male),
            other => Err(CoreError::UnknownSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HivStatus {
    #[default]
    Unknown,
    Negative,
    Positive,
}

impl HivStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HivStatus::Unknown => "Unknown",
            HivStatus::Negative => "Negative",
            HivStatus::Positive => "Positive",
        }
    }
}

impl FromStr for HivStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Unknown" => Ok(HivStatus::Unknown),
            "Negative" => Ok(HivStatus::Negative),
            "Positive" => Ok(HivStatus::Positive),
            other => Err(CoreError::UnknownHivStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HivStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-request input to the triage scorer and syndromic classifier.
///
/// A `None` vital means "not measured", never zero. `pregnant` is only
/// meaningful for female patients; read it through [`PatientContext::is_pregnant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    pub age: u8,
    pub sex: Sex,
    #[serde(default)]
    pub pregnant: bool,
    #[serde(default)]
    pub hiv_status: HivStatus,
    pub temperature_c: Option<f64>,
    pub heart_rate_bpm: Option<f64>,
    pub systolic_bp: Option<u16>,
    pub diastolic_bp: Option<u16>,
    #[serde(default)]
    pub pain_level: u8,
    #[serde(default)]
    pub symptoms: BTreeSet<SymptomTag>,
    #[serde(default)]
    pub risk_factors: BTreeSet<RiskTag>,
    #[serde(default)]
    pub free_text_notes: String,
}

impl PatientContext {
    /// A context with no vitals measured, no symptoms and no risk factors.
    pub fn new(age: u8, sex: Sex) -> Self {
        Self {
            age,
            sex,
            pregnant: false,
            hiv_status: HivStatus::Unknown,
            temperature_c: None,
            heart_rate_bpm: None,
            systolic_bp: None,
            diastolic_bp: None,
            pain_level: 0,
            symptoms: BTreeSet::new(),
            risk_factors: BTreeSet::new(),
            free_text_notes: String::new(),
        }
    }

    /// Pregnancy status, forced false unless the patient is female.
    pub fn is_pregnant(&self) -> bool {
        self.sex == Sex::Female && self.pregnant
    }

    pub fn is_hiv_positive(&self) -> bool {
        self.hiv_status == HivStatus::Positive
    }

    pub fn has_symptom(&self, tag: SymptomTag) -> bool {
        self.symptoms.contains(&tag)
    }

    pub fn has_any_symptom(&self, tags: &[SymptomTag]) -> bool {
        tags.iter().any(|t| self.symptoms.contains(t))
    }

    pub fn has_risk(&self, tag: RiskTag) -> bool {
        self.risk_factors.contains(&tag)
    }
}

/// Identifying fields collected alongside the clinical context. Kept apart
/// from [`PatientContext`] so the rule engine never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIdentity {
    pub patient_id: String,
    pub occupation: String,
    pub phone: Option<String>,
}

impl Default for PatientIdentity {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            occupation: DEFAULT_OCCUPATION.to_string(),
            phone: None,
        }
    }
}
