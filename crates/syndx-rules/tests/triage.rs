use syndx_core::models::patient::{HivStatus, PatientContext, Sex};
use syndx_core::models::symptom::SymptomTag;
use syndx_core::models::triage::TriageLevel;
use syndx_rules::score;
use syndx_rules::triage::breakdown;

#[test]
fn routine_vaginal_discharge_scores_zero() {
    let mut ctx = PatientContext::new(29, Sex::Female);
    ctx.temperature_c = Some(37.0);
    ctx.pain_level = 2;
    ctx.symptoms.insert(SymptomTag::VaginalDischarge);

    let triage = score(&ctx);
    assert_eq!(triage.score, 0);
    assert_eq!(triage.level, TriageLevel::Green);
}

#[test]
fn severe_epididymo_orchitis_is_capped_red() {
    let mut ctx = PatientContext::new(34, Sex::Male);
    ctx.temperature_c = Some(39.5);
    ctx.systolic_bp = Some(85);
    ctx.pain_level = 9;
    ctx.symptoms.insert(SymptomTag::TesticularPain);

    let parts = breakdown(&ctx);
    assert_eq!(parts.temperature, 3);
    assert_eq!(parts.blood_pressure, 3);
    assert_eq!(parts.pain, 3);
    assert_eq!(parts.severe_symptom, 2);
    assert_eq!(parts.total(), 11);

    let triage = score(&ctx);
    assert_eq!(triage.score, 10);
    assert_eq!(triage.level, TriageLevel::Red);
}

#[test]
fn temperature_and_blood_pressure_thresholds() {
    let mut ctx = PatientContext::new(40, Sex::Male);
    ctx.temperature_c = Some(38.0);
    assert_eq!(breakdown(&ctx).temperature, 1);
    ctx.temperature_c = Some(37.9);
    assert_eq!(breakdown(&ctx).temperature, 0);
    ctx.temperature_c = Some(39.0);
    assert_eq!(breakdown(&ctx).temperature, 3);

    ctx.systolic_bp = Some(99);
    assert_eq!(breakdown(&ctx).blood_pressure, 1);
    ctx.systolic_bp = Some(100);
    assert_eq!(breakdown(&ctx).blood_pressure, 0);
    ctx.systolic_bp = Some(89);
    assert_eq!(breakdown(&ctx).blood_pressure, 3);
}

#[test]
fn unmeasured_vitals_add_nothing() {
    let ctx = PatientContext::new(40, Sex::Male);
    assert_eq!(score(&ctx).score, 0);
}

#[test]
fn pregnancy_and_hiv_points() {
    let mut ctx = PatientContext::new(25, Sex::Female);
    ctx.pregnant = true;
    ctx.hiv_status = HivStatus::Positive;
    assert_eq!(score(&ctx).score, 3);

    // Pregnancy does not count for a male context even if the flag is set.
    ctx.sex = Sex::Male;
    assert_eq!(score(&ctx).score, 1);
}

#[test]
fn level_boundaries_follow_the_score() {
    // 3 (fever) + 1 (BP 95) + 2 (severe symptom) = 6 -> YELLOW
    let mut ctx = PatientContext::new(30, Sex::Female);
    ctx.temperature_c = Some(39.2);
    ctx.systolic_bp = Some(95);
    ctx.symptoms.insert(SymptomTag::Fever);
    assert_eq!(score(&ctx).score, 6);
    assert_eq!(score(&ctx).level, TriageLevel::Yellow);

    // + HIV = 7 -> RED
    ctx.hiv_status = HivStatus::Positive;
    assert_eq!(score(&ctx).score, 7);
    assert_eq!(score(&ctx).level, TriageLevel::Red);

    // pain 9 alone = 3 -> GREEN, pain 9 + HIV = 4 -> YELLOW
    let mut ctx = PatientContext::new(30, Sex::Male);
    ctx.pain_level = 9;
    assert_eq!(score(&ctx).level, TriageLevel::Green);
    ctx.hiv_status = HivStatus::Positive;
    assert_eq!(score(&ctx).score, 4);
    assert_eq!(score(&ctx).level, TriageLevel::Yellow);
}

#[test]
fn raw_high_fever_alone_is_not_red() {
    let mut ctx = PatientContext::new(30, Sex::Male);
    ctx.temperature_c = Some(40.0);
    assert_eq!(score(&ctx).level, TriageLevel::Green);
}
