#![allow(dead_code)]

use syndx_core::models::advisory::Confidence;
use syndx_core::models::case::{CaseDraft, CaseRecord, STANDARD_FOLLOWUP};
use syndx_core::models::patient::{HivStatus, Sex};
use syndx_core::models::triage::TriageLevel;

pub fn draft(sex: Sex, age: u8, occupation: &str, symptoms: &str, triage: TriageLevel) -> CaseDraft {
    let triage_score = match triage {
        TriageLevel::Green => 1,
        TriageLevel::Yellow => 5,
        TriageLevel::Red => 8,
    };
    CaseDraft {
        patient_id: format!("P-{age}"),
        age,
        sex,
        occupation: occupation.to_string(),
        pregnant: false,
        hiv: HivStatus::Unknown,
        symptoms: symptoms.to_string(),
        risks: String::new(),
        who_syndromic_diagnosis: "Urethral discharge syndrome; Gonorrhea, Chlamydia".to_string(),
        ai_syndromic_diagnosis: "AI parsing issue; —".to_string(),
        ai_commentary: "AI could not generate interpretation.".to_string(),
        who_treatment: "Ceftriaxone 500 mg IM once + Doxycycline 100 mg PO bid x7d".to_string(),
        ai_treatment: "—".to_string(),
        who_followup: STANDARD_FOLLOWUP.to_string(),
        ai_followup: STANDARD_FOLLOWUP.to_string(),
        ai_confidence: Confidence::Low,
        triage,
        triage_score,
        sms: "Return if symptoms worsen.".to_string(),
    }
}

pub fn record(case_id: u64, symptoms: &str) -> CaseRecord {
    draft(Sex::Male, 30, "Driver", symptoms, TriageLevel::Green)
        .into_record(case_id, jiff::Timestamp::from_second(1_700_000_000 + case_id as i64).unwrap())
}

pub fn records(n: u64, symptoms: &str) -> Vec<CaseRecord> {
    (1..=n).map(|id| record(id, symptoms)).collect()
}
