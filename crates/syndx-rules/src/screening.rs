//! Multi-condition infectious disease screening.
//!
//! Unlike the classifier this is not first-match: every condition whose
//! triggers are present is reported, ordered by urgency.

use serde::{Deserialize, Serialize};
use syndx_core::models::advisory::Confidence;
use syndx_core::models::patient::PatientContext;
use syndx_core::models::symptom::{RiskTag, SymptomTag};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScreenedCondition {
    #[serde(rename = "STI")]
    Sti,
    #[serde(rename = "UTI")]
    Uti,
    #[serde(rename = "RTI")]
    Rti,
    #[serde(rename = "Diarrheal Disease")]
    DiarrhealDisease,
    #[serde(rename = "Sepsis")]
    Sepsis,
    #[serde(rename = "Meningitis")]
    Meningitis,
    #[serde(rename = "Vector-Borne Disease")]
    VectorBorneDisease,
    #[serde(rename = "Endocarditis")]
    Endocarditis,
}

/// Screening urgency, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Urgency {
    Critical,
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningFinding {
    pub condition: ScreenedCondition,
    pub confidence: Confidence,
    pub recommendation: String,
    pub urgency: Urgency,
}

/// What makes a condition suspected.
enum Trigger {
    /// Any of the listed symptoms or risk factors.
    Presentation {
        symptoms: &'static [SymptomTag],
        risks: &'static [RiskTag],
    },
    /// At least two sepsis indicators in the measured vitals.
    SepsisVitals,
}

struct ScreeningRule {
    condition: ScreenedCondition,
    trigger: Trigger,
    confidence: Confidence,
    urgency: Urgency,
    recommendation: &'static str,
}

static SCREENING_RULES: [ScreeningRule; 8] = [
    ScreeningRule {
        condition: ScreenedCondition::Sti,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::UrethralDischarge,
                SymptomTag::VaginalDischarge,
                SymptomTag::GenitalUlcer,
                SymptomTag::Dysuria,
                SymptomTag::LowerAbdominalPain,
                SymptomTag::Dyspareunia,
                SymptomTag::InguinalSwelling,
                SymptomTag::TesticularPain,
            ],
            risks: &[],
        },
        confidence: Confidence::High,
        urgency: Urgency::Moderate,
        recommendation: "Proceed to STI Diagnosis module for detailed evaluation",
    },
    ScreeningRule {
        condition: ScreenedCondition::Uti,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::Dysuria,
                SymptomTag::FrequentUrination,
                SymptomTag::Urgency,
                SymptomTag::LowerAbdominalPain,
                SymptomTag::Hematuria,
            ],
            risks: &[],
        },
        confidence: Confidence::Medium,
        urgency: Urgency::Moderate,
        recommendation: "Urinalysis, consider empiric antibiotics based on local guidelines",
    },
    ScreeningRule {
        condition: ScreenedCondition::Rti,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::Cough,
                SymptomTag::SputumProduction,
                SymptomTag::ShortnessOfBreath,
                SymptomTag::ChestPain,
                SymptomTag::Fever,
            ],
            risks: &[],
        },
        confidence: Confidence::Medium,
        urgency: Urgency::Moderate,
        recommendation: "Chest exam, consider CXR, sputum culture if available",
    },
    ScreeningRule {
        condition: ScreenedCondition::DiarrhealDisease,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::Diarrhea,
                SymptomTag::AbdominalCramps,
                SymptomTag::Nausea,
                SymptomTag::Vomiting,
                SymptomTag::Fever,
            ],
            risks: &[],
        },
        confidence: Confidence::Medium,
        urgency: Urgency::Moderate,
        recommendation: "Stool exam, oral rehydration, consider antibiotics if bacterial",
    },
    ScreeningRule {
        condition: ScreenedCondition::Sepsis,
        trigger: Trigger::SepsisVitals,
        confidence: Confidence::High,
        urgency: Urgency::Critical,
        recommendation: "EMERGENCY - Immediate IV antibiotics, fluid resuscitation, hospital admission",
    },
    ScreeningRule {
        condition: ScreenedCondition::Meningitis,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::Headache,
                SymptomTag::NeckStiffness,
                SymptomTag::Photophobia,
                SymptomTag::Fever,
                SymptomTag::AlteredMentalStatus,
            ],
            risks: &[],
        },
        confidence: Confidence::Medium,
        urgency: Urgency::Critical,
        recommendation: "EMERGENCY - Lumbar puncture, IV antibiotics, hospital admission",
    },
    ScreeningRule {
        condition: ScreenedCondition::VectorBorneDisease,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::Fever,
                SymptomTag::Headache,
                SymptomTag::Myalgia,
                SymptomTag::Rash,
            ],
            risks: &[RiskTag::RecentTravel],
        },
        confidence: Confidence::Low,
        urgency: Urgency::Moderate,
        recommendation: "Malaria test, consider dengue/other vector-borne diseases based on region",
    },
    ScreeningRule {
        condition: ScreenedCondition::Endocarditis,
        trigger: Trigger::Presentation {
            symptoms: &[
                SymptomTag::Fever,
                SymptomTag::HeartMurmur,
                SymptomTag::Fatigue,
                SymptomTag::NightSweats,
            ],
            risks: &[RiskTag::IvDrugUse],
        },
        confidence: Confidence::Low,
        urgency: Urgency::High,
        recommendation: "Blood cultures, echocardiogram, infectious disease consult",
    },
];

impl ScreeningRule {
    fn triggered_by(&self, context: &PatientContext) -> bool {
        match self.trigger {
            Trigger::Presentation { symptoms, risks } => {
                context.has_any_symptom(symptoms) || risks.iter().any(|r| context.has_risk(*r))
            }
            Trigger::SepsisVitals => sepsis_indicators(context) >= 2,
        }
    }

    fn finding(&self) -> ScreeningFinding {
        ScreeningFinding {
            condition: self.condition,
            confidence: self.confidence,
            recommendation: self.recommendation.to_string(),
            urgency: self.urgency,
        }
    }
}

/// Count the sepsis indicators present in the measured vitals:
/// fever above 38.5°C, tachycardia above 100 bpm, systolic below 100 mmHg.
pub fn sepsis_indicators(context: &PatientContext) -> usize {
    [
        context.temperature_c.is_some_and(|t| t > 38.5),
        context.heart_rate_bpm.is_some_and(|hr| hr > 100.0),
        context.systolic_bp.is_some_and(|s| s < 100),
    ]
    .into_iter()
    .filter(|&hit| hit)
    .count()
}

/// Screen a context for every suspected condition, most urgent first.
///
/// An empty result means no infectious pattern was detected.
pub fn screen(context: &PatientContext) -> Vec<ScreeningFinding> {
    let mut findings: Vec<ScreeningFinding> = SCREENING_RULES
        .iter()
        .filter(|rule| rule.triggered_by(context))
        .map(ScreeningRule::finding)
        .collect();

    // Stable: conditions of equal urgency keep table order.
    findings.sort_by_key(|f| f.urgency);
    findings
}
