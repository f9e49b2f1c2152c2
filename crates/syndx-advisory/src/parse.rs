//! The single parser for advisory model output.

use serde::Deserialize;
use syndx_core::models::advisory::{AdvisoryResult, Confidence, PLACEHOLDER};
use tracing::debug;

use crate::error::AdvisoryError;

/// The JSON shape the model is asked to return.
#[derive(Debug, Deserialize)]
struct RawAdvisory {
    #[serde(default)]
    probable: String,
    #[serde(default)]
    possible: String,
    #[serde(default)]
    treatment: String,
    #[serde(default)]
    labs: String,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    patient_sms: String,
}

fn or_placeholder(s: String) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse model output into an [`AdvisoryResult`].
///
/// Models often wrap JSON in prose or code fences, so the object is taken
/// from the first `{` to the last `}`. A response with neither a probable
/// nor a possible diagnosis is treated as malformed.
pub fn parse_advisory(text: &str) -> Result<AdvisoryResult, AdvisoryError> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(AdvisoryError::Malformed(
            "no JSON object in response".to_string(),
        ));
    };
    if end < start {
        return Err(AdvisoryError::Malformed(
            "no JSON object in response".to_string(),
        ));
    }

    let raw: RawAdvisory = serde_json::from_str(&text[start..=end])
        .map_err(|e| AdvisoryError::Malformed(format!("failed to parse advisory: {e}")))?;

    if raw.probable.trim().is_empty() && raw.possible.trim().is_empty() {
        return Err(AdvisoryError::Malformed(
            "advisory carries no diagnosis".to_string(),
        ));
    }

    let confidence = match raw.confidence.as_deref() {
        Some(c) => Confidence::parse_lenient(c).unwrap_or_else(|| {
            debug!(confidence = c, "unrecognised confidence, using low");
            Confidence::Low
        }),
        None => Confidence::Low,
    };

    Ok(AdvisoryResult {
        probable: raw.probable.trim().to_string(),
        possible: raw.possible.trim().to_string(),
        treatment: or_placeholder(raw.treatment),
        labs: or_placeholder(raw.labs),
        confidence,
        patient_message: raw.patient_sms.trim().to_string(),
    })
}
