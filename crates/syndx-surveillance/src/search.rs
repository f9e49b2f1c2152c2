use jiff::Timestamp;
use syndx_core::models::case::CaseRecord;
use syndx_core::models::triage::TriageLevel;

fn field_matches(value: &serde_json::Value, needle: &str) -> bool {
    match value {
        serde_json::Value::String(s) => s.to_lowercase().contains(needle),
        serde_json::Value::Null => false,
        other => other.to_string().to_lowercase().contains(needle),
    }
}

fn record_matches(record: &CaseRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(fields)) => {
            fields.values().any(|v| field_matches(v, needle))
        }
        _ => false,
    }
}

/// Records where any field contains `term` (case-insensitive), optionally
/// restricted to the given triage levels. An empty `levels` admits all.
pub fn search<'a>(
    history: &'a [CaseRecord],
    term: &str,
    levels: &[TriageLevel],
) -> Vec<&'a CaseRecord> {
    let needle = term.trim().to_lowercase();
    history
        .iter()
        .filter(|r| levels.is_empty() || levels.contains(&r.triage))
        .filter(|r| record_matches(r, &needle))
        .collect()
}

/// Records timestamped within `[start, end)`.
pub fn between(history: &[CaseRecord], start: Timestamp, end: Timestamp) -> Vec<&CaseRecord> {
    history
        .iter()
        .filter(|r| r.timestamp >= start && r.timestamp < end)
        .collect()
}
