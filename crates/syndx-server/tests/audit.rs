use serde_json::json;
use syndx_core::models::triage::TriageLevel;
use syndx_rules::classifier::RuleId;
use syndx_server::audit::{CaseAction, CaseAuditEvent};

#[test]
fn case_audit_names_the_outcome() {
    let event = CaseAuditEvent {
        action: CaseAction::Recorded,
        case_id: Some(7),
        rule: RuleId::EpididymoOrchitis,
        triage: TriageLevel::Red,
        triage_score: 9,
        advisory_available: true,
    };

    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({
            "action": "recorded",
            "case_id": 7,
            "rule": "epididymo_orchitis",
            "triage": "RED",
            "triage_score": 9,
            "advisory_available": true,
        })
    );
    event.emit();
}

#[test]
fn unpersisted_case_has_no_id() {
    let event = CaseAuditEvent {
        action: CaseAction::NotPersisted,
        case_id: None,
        rule: RuleId::NoDefinedSyndrome,
        triage: TriageLevel::Green,
        triage_score: 0,
        advisory_available: false,
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["action"], "not_persisted");
    assert!(value["case_id"].is_null());
    assert_eq!(CaseAction::NotPersisted.as_str(), "not_persisted");
    event.emit();
}
