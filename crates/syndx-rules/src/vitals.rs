//! Vital sign normalizer.
//!
//! Parsing fails soft: anything that is not a clean number becomes `None`
//! ("not measured"). Range checks produce advisory warnings only; callers
//! keep using the raw value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The vital a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalSign {
    Temperature,
    HeartRate,
    SystolicBp,
    DiastolicBp,
}

/// Inclusive physiological range for a vital sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

impl VitalRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const TEMPERATURE_RANGE: VitalRange = VitalRange { min: 35.0, max: 42.0 };
pub const HEART_RATE_RANGE: VitalRange = VitalRange { min: 40.0, max: 180.0 };
pub const SYSTOLIC_RANGE: VitalRange = VitalRange { min: 60.0, max: 250.0 };
pub const DIASTOLIC_RANGE: VitalRange = VitalRange { min: 40.0, max: 150.0 };

/// A non-blocking range anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalWarning {
    pub vital: VitalSign,
    pub value: f64,
    pub expected_range: VitalRange,
    pub message: String,
}

/// Parse a temperature in °C. Returns `None` on anything non-numeric.
pub fn parse_temperature(text: &str) -> Option<f64> {
    parse_measurement(text)
}

/// Parse a heart rate in bpm. Returns `None` on anything non-numeric.
pub fn parse_heart_rate(text: &str) -> Option<f64> {
    parse_measurement(text)
}

fn parse_measurement(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `"<digits>/<digits>"` with optional whitespace around either part.
///
/// Any other shape yields `(None, None)`; a half-valid reading is never
/// returned.
pub fn parse_blood_pressure(text: &str) -> (Option<u16>, Option<u16>) {
    let Some((systolic, diastolic)) = text.split_once('/') else {
        return (None, None);
    };
    match (parse_digits(systolic), parse_digits(diastolic)) {
        (Some(s), Some(d)) => (Some(s), Some(d)),
        _ => (None, None),
    }
}

fn parse_digits(part: &str) -> Option<u16> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Flag measured vitals that fall outside their physiological range.
pub fn validate_ranges(
    temperature_c: Option<f64>,
    heart_rate_bpm: Option<f64>,
    systolic: Option<u16>,
    diastolic: Option<u16>,
) -> Vec<VitalWarning> {
    let checks = [
        (
            VitalSign::Temperature,
            temperature_c,
            TEMPERATURE_RANGE,
            "Temperature outside normal range (35-42°C)",
        ),
        (
            VitalSign::HeartRate,
            heart_rate_bpm,
            HEART_RATE_RANGE,
            "Heart rate outside normal range (40-180 bpm)",
        ),
        (
            VitalSign::SystolicBp,
            systolic.map(f64::from),
            SYSTOLIC_RANGE,
            "Systolic BP outside normal range (60-250 mmHg)",
        ),
        (
            VitalSign::DiastolicBp,
            diastolic.map(f64::from),
            DIASTOLIC_RANGE,
            "Diastolic BP outside normal range (40-150 mmHg)",
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(vital, value, range, message)| {
            let value = value?;
            (!range.contains(value)).then(|| VitalWarning {
                vital,
                value,
                expected_range: range,
                message: message.to_string(),
            })
        })
        .collect()
}
