//! The full diagnosis pipeline behind `POST /diagnose`.
//!
//! The deterministic path (normalize, score, classify) always completes.
//! The advisory is bounded by a timeout and can only ever degrade the
//! comparison to its safe default. A case log that cannot be written only
//! marks the diagnosis as not persisted.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use syndx_advisory::{AdvisoryProvider, Comparison, aggregate, fetch_advisory, patient_message};
use syndx_core::models::case::{CaseDraft, CaseRecord};
use syndx_core::models::syndrome::SyndromicResult;
use syndx_core::models::triage::TriageScore;
use syndx_rules::discharge::DischargeAppearance;
use syndx_rules::intake::{PatientIntake, normalize_intake};
use syndx_rules::screening::{ScreeningFinding, screen};
use syndx_rules::triage::{TriageBreakdown, breakdown};
use syndx_rules::vitals::VitalWarning;
use syndx_rules::{matching_rule, score};
use syndx_surveillance::CaseLog;
use tracing::{error, info};

use crate::audit::{CaseAction, CaseAuditEvent};
use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub struct DiagnoseRequest {
    #[serde(flatten)]
    pub intake: PatientIntake,
    #[serde(default)]
    pub discharge: Option<DischargeAppearance>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    /// The logged case, `None` when the case log could not be written.
    pub case: Option<CaseRecord>,
    pub persisted: bool,
    pub triage: TriageScore,
    pub breakdown: TriageBreakdown,
    pub badge: &'static str,
    pub syndromic: SyndromicResult,
    pub comparison: Comparison,
    pub screening: Vec<ScreeningFinding>,
    pub warnings: Vec<VitalWarning>,
    pub discharge_assessment: Option<&'static str>,
    pub patient_message: String,
}

/// Run one intake through every stage and append the case to the log.
pub async fn diagnose(
    case_log: &CaseLog,
    advisor: &dyn AdvisoryProvider,
    advisory_timeout: Duration,
    request: &DiagnoseRequest,
) -> Result<Diagnosis, ApiError> {
    let normalized = normalize_intake(&request.intake)?;
    let context = &normalized.context;

    let triage = score(context);
    let rule = matching_rule(context);
    let syndromic = rule.record.to_result();
    info!(
        triage = %triage.level,
        triage_score = triage.score,
        syndrome = %syndromic.probable_syndrome,
        "deterministic diagnosis complete"
    );

    let advisory = fetch_advisory(advisor, context, advisory_timeout).await;
    let comparison = aggregate(&syndromic, advisory);
    let message = patient_message(&comparison, normalized.identity.phone.as_deref());

    let draft = CaseDraft::new(
        &normalized.identity,
        context,
        triage,
        &syndromic,
        &comparison.advisory,
        comparison.diagnosis_commentary(),
        message.clone(),
    );

    let case = match case_log.record(draft).await {
        Ok(case) => Some(case),
        Err(e) => {
            error!(
                error = %e,
                triage = %triage.level,
                syndrome = %syndromic.probable_syndrome,
                "case could not be persisted"
            );
            None
        }
    };

    CaseAuditEvent {
        action: if case.is_some() {
            CaseAction::Recorded
        } else {
            CaseAction::NotPersisted
        },
        case_id: case.as_ref().map(|c| c.case_id),
        rule: rule.id,
        triage: triage.level,
        triage_score: triage.score,
        advisory_available: comparison.advisory_available,
    }
    .emit();

    Ok(Diagnosis {
        persisted: case.is_some(),
        case,
        breakdown: breakdown(context),
        badge: triage.level.badge(),
        screening: screen(context),
        triage,
        syndromic,
        comparison,
        warnings: normalized.warnings,
        discharge_assessment: request.discharge.map(|d| d.assess()),
        patient_message: message,
    })
}
