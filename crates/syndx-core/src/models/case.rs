use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::advisory::{AdvisoryResult, Confidence};
use super::patient::{DEFAULT_OCCUPATION, HivStatus, PatientContext, PatientIdentity, Sex};
use super::symptom::join_tags;
use super::syndrome::SyndromicResult;
use super::triage::{TriageLevel, TriageScore};

/// Follow-up and counseling advice recorded for both columns.
pub const STANDARD_FOLLOWUP: &str = "Partner treatment; condom advice; return if no improvement";

/// The persisted unit: one completed diagnosis. Never mutated after creation.
///
/// Field names on the wire are fixed by downstream reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseRecord {
    #[serde(rename = "CaseID")]
    pub case_id: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: jiff::Timestamp,
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "Age")]
    pub age: u8,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Occupation", default = "default_occupation")]
    pub occupation: String,
    #[serde(rename = "Pregnant", with = "yes_no")]
    #[ts(type = "\"Yes\" | \"No\"")]
    pub pregnant: bool,
    #[serde(rename = "HIV")]
    pub hiv: HivStatus,
    /// Semicolon-joined symptom labels.
    #[serde(rename = "Symptoms")]
    pub symptoms: String,
    /// Semicolon-joined risk labels.
    #[serde(rename = "Risks")]
    pub risks: String,
    #[serde(rename = "WHO_SyndromicDiagnosis")]
    pub who_syndromic_diagnosis: String,
    #[serde(rename = "AI_SyndromicDiagnosis")]
    pub ai_syndromic_diagnosis: String,
    #[serde(rename = "AI_Commentary")]
    pub ai_commentary: String,
    #[serde(rename = "WHO_Treatment")]
    pub who_treatment: String,
    #[serde(rename = "AI_Treatment")]
    pub ai_treatment: String,
    #[serde(rename = "WHO_Followup")]
    pub who_followup: String,
    #[serde(rename = "AI_Followup")]
    pub ai_followup: String,
    #[serde(rename = "AI_Confidence")]
    pub ai_confidence: Confidence,
    #[serde(rename = "Triage")]
    pub triage: TriageLevel,
    #[serde(rename = "Triage_Score")]
    pub triage_score: u8,
    #[serde(rename = "SMS")]
    pub sms: String,
}

fn default_occupation() -> String {
    DEFAULT_OCCUPATION.to_string()
}

impl CaseRecord {
    /// Split the persisted symptom field back into labels, skipping empties.
    pub fn symptom_labels(&self) -> impl Iterator<Item = &str> {
        self.symptoms
            .split(super::symptom::TAG_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Everything needed to create a [`CaseRecord`] except the identity the
/// case log assigns (id and timestamp).
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDraft {
    pub patient_id: String,
    pub age: u8,
    pub sex: Sex,
    pub occupation: String,
    pub pregnant: bool,
    pub hiv: HivStatus,
    pub symptoms: String,
    pub risks: String,
    pub who_syndromic_diagnosis: String,
    pub ai_syndromic_diagnosis: String,
    pub ai_commentary: String,
    pub who_treatment: String,
    pub ai_treatment: String,
    pub who_followup: String,
    pub ai_followup: String,
    pub ai_confidence: Confidence,
    pub triage: TriageLevel,
    pub triage_score: u8,
    pub sms: String,
}

impl CaseDraft {
    /// Flatten a completed diagnosis. The syndromic treatment is always the
    /// treatment of record; the advisory columns are informational.
    pub fn new(
        identity: &PatientIdentity,
        context: &PatientContext,
        triage: TriageScore,
        syndromic: &SyndromicResult,
        advisory: &AdvisoryResult,
        commentary: impl Into<String>,
        sms: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: identity.patient_id.clone(),
            age: context.age,
            sex: context.sex,
            occupation: identity.occupation.clone(),
            pregnant: context.is_pregnant(),
            hiv: context.hiv_status,
            symptoms: join_tags(&context.symptoms),
            risks: join_tags(&context.risk_factors),
            who_syndromic_diagnosis: syndromic.merged_diagnosis(),
            ai_syndromic_diagnosis: advisory.merged_diagnosis(),
            ai_commentary: commentary.into(),
            who_treatment: syndromic.treatment.clone(),
            ai_treatment: advisory.treatment.clone(),
            who_followup: STANDARD_FOLLOWUP.to_string(),
            ai_followup: STANDARD_FOLLOWUP.to_string(),
            ai_confidence: advisory.confidence,
            triage: triage.level,
            triage_score: triage.score,
            sms: sms.into(),
        }
    }

    pub fn into_record(self, case_id: u64, timestamp: jiff::Timestamp) -> CaseRecord {
        CaseRecord {
            case_id,
            timestamp,
            patient_id: self.patient_id,
            age: self.age,
            sex: self.sex,
            occupation: self.occupation,
            pregnant: self.pregnant,
            hiv: self.hiv,
            symptoms: self.symptoms,
            risks: self.risks,
            who_syndromic_diagnosis: self.who_syndromic_diagnosis,
            ai_syndromic_diagnosis: self.ai_syndromic_diagnosis,
            ai_commentary: self.ai_commentary,
            who_treatment: self.who_treatment,
            ai_treatment: self.ai_treatment,
            who_followup: self.who_followup,
            ai_followup: self.ai_followup,
            ai_confidence: self.ai_confidence,
            triage: self.triage,
            triage_score: self.triage_score,
            sms: self.sms,
        }
    }
}

/// `"Yes"` / `"No"` on the wire, as the intake form records pregnancy.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"\"Yes\" or \"No\"",
            )),
        }
    }
}
