//! Prompt assembly for the advisory model.

use std::fmt::Display;

use syndx_core::models::patient::PatientContext;
use syndx_core::models::symptom::Tag;

pub const ADVISORY_SYSTEM_PROMPT: &str =
    "You are a careful assistant using WHO syndromic guidelines for STIs.";

const RESPONSE_FORMAT: &str = r#"Return JSON only:
{
  "probable": "...",
  "possible": "...",
  "treatment": "...",
  "labs": "...",
  "confidence": "low|medium|high",
  "patient_sms": "plain text <=160 chars"
}"#;

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

fn list_or_none<'a, T: Tag + 'a>(tags: impl IntoIterator<Item = &'a T>) -> String {
    let labels: Vec<&str> = tags.into_iter().map(|t| t.label()).collect();
    if labels.is_empty() {
        "none".to_string()
    } else {
        labels.join(", ")
    }
}

/// Render the patient summary sent as the user message.
pub fn build_advisory_prompt(context: &PatientContext) -> String {
    let notes = if context.free_text_notes.is_empty() {
        "n/a"
    } else {
        context.free_text_notes.as_str()
    };

    format!(
        "Patient info:\n\
         Sex: {sex}, Pregnant: {pregnant}, HIV: {hiv}, Age: {age}\n\
         Vitals: Temp={temp}, HR={hr}, BP={sbp}/{dbp}, Pain={pain}/10\n\
         Symptoms: {symptoms}\n\
         Risks: {risks}\n\
         Notes: {notes}\n\
         \n\
         {response_format}",
        sex = context.sex,
        pregnant = if context.is_pregnant() { "Yes" } else { "No" },
        hiv = context.hiv_status,
        age = context.age,
        temp = or_na(context.temperature_c),
        hr = or_na(context.heart_rate_bpm),
        sbp = or_na(context.systolic_bp),
        dbp = or_na(context.diastolic_bp),
        pain = context.pain_level,
        symptoms = list_or_none(&context.symptoms),
        risks = list_or_none(&context.risk_factors),
        response_format = RESPONSE_FORMAT,
    )
}
