use serde::Serialize;
use syndx_core::models::triage::TriageLevel;
use syndx_rules::classifier::RuleId;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseAction {
    Recorded,
    NotPersisted,
}

impl CaseAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseAction::Recorded => "recorded",
            CaseAction::NotPersisted => "not_persisted",
        }
    }
}

/// Audit trail entry for one completed diagnosis. Carries the outcome but
/// never patient identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct CaseAuditEvent {
    pub action: CaseAction,
    /// `None` when the case never reached the log.
    pub case_id: Option<u64>,
    pub rule: RuleId,
    pub triage: TriageLevel,
    pub triage_score: u8,
    pub advisory_available: bool,
}

impl CaseAuditEvent {
    pub fn emit(&self) {
        match self.action {
            CaseAction::Recorded => info!(
                audit.action = self.action.as_str(),
                audit.case_id = self.case_id,
                audit.rule = self.rule.as_str(),
                audit.triage = %self.triage,
                audit.triage_score = self.triage_score,
                audit.advisory_available = self.advisory_available,
                "case audit"
            ),
            CaseAction::NotPersisted => warn!(
                audit.action = self.action.as_str(),
                audit.rule = self.rule.as_str(),
                audit.triage = %self.triage,
                audit.triage_score = self.triage_score,
                audit.advisory_available = self.advisory_available,
                "case audit"
            ),
        }
    }
}
