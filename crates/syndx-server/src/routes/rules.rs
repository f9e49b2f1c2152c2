//! Stateless rule engine endpoints. Nothing here touches the case log.

use axum::Json;
use serde::{Deserialize, Serialize};
use syndx_core::models::syndrome::SyndromicResult;
use syndx_core::models::triage::TriageLevel;
use syndx_rules::classifier::{RuleId, matching_rule};
use syndx_rules::discharge::DischargeAppearance;
use syndx_rules::intake::{PatientIntake, normalize_intake};
use syndx_rules::screening::{ScreeningFinding, screen};
use syndx_rules::triage::{TriageBreakdown, breakdown};
use syndx_rules::vitals::{self, VitalWarning};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct VitalsRequest {
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub heart_rate: String,
    #[serde(default)]
    pub blood_pressure: String,
}

#[derive(Debug, Serialize)]
pub struct VitalsResponse {
    pub temperature_c: Option<f64>,
    pub heart_rate_bpm: Option<f64>,
    pub systolic_bp: Option<u16>,
    pub diastolic_bp: Option<u16>,
    pub warnings: Vec<VitalWarning>,
}

pub async fn normalize_vitals(Json(body): Json<VitalsRequest>) -> Json<VitalsResponse> {
    let temperature_c = vitals::parse_temperature(&body.temperature);
    let heart_rate_bpm = vitals::parse_heart_rate(&body.heart_rate);
    let (systolic_bp, diastolic_bp) = vitals::parse_blood_pressure(&body.blood_pressure);
    let warnings = vitals::validate_ranges(temperature_c, heart_rate_bpm, systolic_bp, diastolic_bp);

    Json(VitalsResponse {
        temperature_c,
        heart_rate_bpm,
        systolic_bp,
        diastolic_bp,
        warnings,
    })
}

#[derive(Debug, Serialize)]
pub struct TriageResponse {
    pub score: u8,
    pub level: TriageLevel,
    pub badge: &'static str,
    pub breakdown: TriageBreakdown,
    pub warnings: Vec<VitalWarning>,
}

pub async fn triage(Json(body): Json<PatientIntake>) -> Result<Json<TriageResponse>, ApiError> {
    let normalized = normalize_intake(&body)?;
    let result = syndx_rules::score(&normalized.context);

    Ok(Json(TriageResponse {
        score: result.score,
        level: result.level,
        badge: result.level.badge(),
        breakdown: breakdown(&normalized.context),
        warnings: normalized.warnings,
    }))
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub rule: RuleId,
    #[serde(flatten)]
    pub result: SyndromicResult,
}

pub async fn classify(Json(body): Json<PatientIntake>) -> Result<Json<ClassifyResponse>, ApiError> {
    let normalized = normalize_intake(&body)?;
    let rule = matching_rule(&normalized.context);

    Ok(Json(ClassifyResponse {
        rule: rule.id,
        result: rule.record.to_result(),
    }))
}

pub async fn screening(
    Json(body): Json<PatientIntake>,
) -> Result<Json<Vec<ScreeningFinding>>, ApiError> {
    let normalized = normalize_intake(&body)?;
    Ok(Json(screen(&normalized.context)))
}

#[derive(Debug, Deserialize)]
pub struct DischargeRequest {
    pub appearance: DischargeAppearance,
}

#[derive(Debug, Serialize)]
pub struct DischargeResponse {
    pub appearance: DischargeAppearance,
    pub assessment: &'static str,
}

pub async fn discharge(Json(body): Json<DischargeRequest>) -> Json<DischargeResponse> {
    Json(DischargeResponse {
        appearance: body.appearance,
        assessment: body.appearance.assess(),
    })
}
