//! The input boundary between a raw form submission and the rule engine.
//!
//! Vitals fail soft (unparseable text becomes "not measured"). Vocabulary
//! does not: an unknown symptom or risk label is rejected here so it can
//! never be silently ignored by the rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use syndx_core::models::patient::{
    DEFAULT_OCCUPATION, HivStatus, PatientContext, PatientIdentity, Sex,
};
use syndx_core::models::symptom::{RiskTag, SymptomTag};
use tracing::warn;

use crate::error::RuleError;
use crate::vitals::{self, VitalWarning};

pub const MAX_AGE: u32 = 120;
pub const MAX_PAIN: u32 = 10;

/// A form submission as entered at the point of care.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientIntake {
    #[serde(default)]
    pub patient_id: String,
    pub age: u32,
    pub sex: Sex,
    #[serde(default)]
    pub pregnant: bool,
    #[serde(default)]
    pub hiv_status: HivStatus,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub heart_rate: String,
    #[serde(default)]
    pub blood_pressure: String,
    #[serde(default)]
    pub pain_level: u32,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A validated intake: the rule engine's input plus everything kept apart
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedIntake {
    pub context: PatientContext,
    pub identity: PatientIdentity,
    pub warnings: Vec<VitalWarning>,
}

/// Validate and normalize a form submission.
pub fn normalize_intake(intake: &PatientIntake) -> Result<NormalizedIntake, RuleError> {
    if intake.age > MAX_AGE {
        return Err(RuleError::AgeOutOfRange(intake.age));
    }
    if intake.pain_level > MAX_PAIN {
        return Err(RuleError::PainOutOfRange(intake.pain_level));
    }

    let symptoms = intake
        .symptoms
        .iter()
        .map(|s| s.parse::<SymptomTag>())
        .collect::<Result<BTreeSet<_>, _>>()?;
    let risk_factors = intake
        .risk_factors
        .iter()
        .map(|s| s.parse::<RiskTag>())
        .collect::<Result<BTreeSet<_>, _>>()?;

    let sex = intake.sex;
    let temperature_c = vitals::parse_temperature(&intake.temperature);
    let heart_rate_bpm = vitals::parse_heart_rate(&intake.heart_rate);
    let (systolic_bp, diastolic_bp) = vitals::parse_blood_pressure(&intake.blood_pressure);

    let warnings =
        vitals::validate_ranges(temperature_c, heart_rate_bpm, systolic_bp, diastolic_bp);
    for w in &warnings {
        warn!(vital = ?w.vital, value = w.value, "{}", w.message);
    }

    let context = PatientContext {
        // Checked against MAX_AGE above.
        age: intake.age as u8,
        sex,
        pregnant: sex == Sex::Female && intake.pregnant,
        hiv_status: intake.hiv_status,
        temperature_c,
        heart_rate_bpm,
        systolic_bp,
        diastolic_bp,
        pain_level: intake.pain_level as u8,
        symptoms,
        risk_factors,
        free_text_notes: intake.notes.trim().to_string(),
    };

    let identity = PatientIdentity {
        patient_id: intake.patient_id.trim().to_string(),
        occupation: intake
            .occupation
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_OCCUPATION)
            .to_string(),
        phone: intake
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
    };

    Ok(NormalizedIntake {
        context,
        identity,
        warnings,
    })
}
