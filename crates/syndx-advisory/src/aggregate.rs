//! Side-by-side comparison of the syndromic result and the advisory.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use syndx_core::models::advisory::{AdvisoryResult, PLACEHOLDER};
use syndx_core::models::case::STANDARD_FOLLOWUP;
use syndx_core::models::patient::PatientContext;
use syndx_core::models::syndrome::SyndromicResult;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::AdvisoryError;
use crate::provider::AdvisoryProvider;

pub const FIELD_DIAGNOSIS: &str = "Syndromic Diagnosis";
pub const FIELD_TREATMENT: &str = "Treatment";
pub const FIELD_FOLLOWUP: &str = "Follow-up & Counseling";

pub const UNINTERPRETABLE_COMMENTARY: &str = "AI could not generate interpretation.";
pub const TREATMENT_COMMENTARY: &str =
    "AI supports WHO regimen; may suggest refinements if aligned.";
pub const FOLLOWUP_COMMENTARY: &str =
    "AI emphasizes adherence, partner notification, condom use, and timely return visits.";

pub const DEFAULT_PATIENT_MESSAGE: &str =
    "Return if symptoms worsen. Take medication as prescribed. Complete the full course.";

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonRow {
    pub field: String,
    pub baseline: String,
    pub advisory: String,
    pub commentary: String,
}

/// The syndromic baseline next to the advisory. The baseline treatment is
/// always the treatment of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
    /// The advisory as compared, or the safe default when none was available.
    pub advisory: AdvisoryResult,
    pub advisory_available: bool,
    /// Confidence as a percentage, e.g. `"70%"`.
    pub confidence_display: String,
}

impl Comparison {
    /// Commentary on the diagnosis row, as stored in the case log.
    pub fn diagnosis_commentary(&self) -> &str {
        self.rows
            .iter()
            .find(|r| r.field == FIELD_DIAGNOSIS)
            .map_or(UNINTERPRETABLE_COMMENTARY, |r| r.commentary.as_str())
    }
}

fn diagnosis_commentary(advisory: &AdvisoryResult, baseline: &str) -> String {
    if advisory.is_placeholder() || baseline == PLACEHOLDER {
        return UNINTERPRETABLE_COMMENTARY.to_string();
    }
    format!(
        "AI suggests: {}. WHO baseline: {baseline}. Overlap noted; AI highlights potential nuances or severity.",
        advisory.merged_diagnosis()
    )
}

/// Build the comparison. A missing advisory is replaced by
/// [`AdvisoryResult::unavailable`].
pub fn aggregate(syndromic: &SyndromicResult, advisory: Option<AdvisoryResult>) -> Comparison {
    let advisory_available = advisory.is_some();
    let advisory = advisory.unwrap_or_else(AdvisoryResult::unavailable);
    let baseline = syndromic.merged_diagnosis();

    let rows = vec![
        ComparisonRow {
            field: FIELD_DIAGNOSIS.to_string(),
            commentary: diagnosis_commentary(&advisory, &baseline),
            baseline,
            advisory: advisory.merged_diagnosis(),
        },
        ComparisonRow {
            field: FIELD_TREATMENT.to_string(),
            baseline: syndromic.treatment.clone(),
            advisory: advisory.treatment.clone(),
            commentary: TREATMENT_COMMENTARY.to_string(),
        },
        ComparisonRow {
            field: FIELD_FOLLOWUP.to_string(),
            baseline: STANDARD_FOLLOWUP.to_string(),
            advisory: STANDARD_FOLLOWUP.to_string(),
            commentary: FOLLOWUP_COMMENTARY.to_string(),
        },
    ];

    Comparison {
        rows,
        confidence_display: advisory.confidence.display_percent().to_string(),
        advisory,
        advisory_available,
    }
}

/// Ask the provider for an advisory, bounded by `timeout`.
///
/// Never fails: a timeout, provider error or malformed response is logged
/// and yields `None`. On timeout the provider future is dropped, which
/// cancels the outstanding call.
pub async fn fetch_advisory(
    provider: &dyn AdvisoryProvider,
    context: &PatientContext,
    timeout: Duration,
) -> Option<AdvisoryResult> {
    let outcome = match tokio::time::timeout(timeout, provider.get_advisory(context)).await {
        Ok(result) => result,
        Err(_) => Err(AdvisoryError::Timeout(timeout)),
    };

    match outcome {
        Ok(advisory) => Some(advisory),
        Err(AdvisoryError::Disabled) => {
            debug!(provider = provider.name(), "advisory disabled");
            None
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "advisory unavailable, using baseline only");
            None
        }
    }
}

/// The message sent to the patient, addressed when a phone number is known.
pub fn patient_message(comparison: &Comparison, phone: Option<&str>) -> String {
    let message = comparison.advisory.patient_message.trim();
    let message = if message.is_empty() {
        DEFAULT_PATIENT_MESSAGE
    } else {
        message
    };

    match phone.map(str::trim).filter(|p| !p.is_empty()) {
        Some(phone) => format!("To {phone}: {message}"),
        None => message.to_string(),
    }
}
