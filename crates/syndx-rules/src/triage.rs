//! Additive triage scoring.
//!
//! Every component is evaluated (no early exit), summed, and capped at 10.
//! The resulting score is the single source of truth for the triage level.

use serde::{Deserialize, Serialize};
use syndx_core::models::patient::PatientContext;
use syndx_core::models::symptom::SymptomTag;
use syndx_core::models::triage::TriageScore;
use ts_rs::TS;

/// Presenting with any of these adds two points.
pub const SEVERE_SYMPTOMS: [SymptomTag; 3] = [
    SymptomTag::LowerAbdominalPain,
    SymptomTag::TesticularPain,
    SymptomTag::Fever,
];

/// Per-component points behind a triage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageBreakdown {
    pub temperature: u8,
    pub blood_pressure: u8,
    pub pain: u8,
    pub pregnancy: u8,
    pub hiv: u8,
    pub severe_symptom: u8,
}

impl TriageBreakdown {
    pub fn total(&self) -> u32 {
        [
            self.temperature,
            self.blood_pressure,
            self.pain,
            self.pregnancy,
            self.hiv,
            self.severe_symptom,
        ]
        .iter()
        .map(|&p| u32::from(p))
        .sum()
    }
}

/// Compute each component of the score for a context.
pub fn breakdown(context: &PatientContext) -> TriageBreakdown {
    let temperature = match context.temperature_c {
        Some(t) if t >= 39.0 => 3,
        Some(t) if t >= 38.0 => 1,
        _ => 0,
    };

    let blood_pressure = match context.systolic_bp {
        Some(s) if s < 90 => 3,
        Some(s) if s < 100 => 1,
        _ => 0,
    };

    let pain = (context.pain_level / 3).min(3);

    TriageBreakdown {
        temperature,
        blood_pressure,
        pain,
        pregnancy: if context.is_pregnant() { 2 } else { 0 },
        hiv: if context.is_hiv_positive() { 1 } else { 0 },
        severe_symptom: if context.has_any_symptom(&SEVERE_SYMPTOMS) { 2 } else { 0 },
    }
}

/// Score a context on the 0–10 scale and derive its triage level.
pub fn score(context: &PatientContext) -> TriageScore {
    TriageScore::from_total(breakdown(context).total())
}
