//! Outbreak pattern detection.
//!
//! A coarse frequency heuristic over recent cases, not a statistical
//! significance test. An alert is a prompt for a human to look closer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use syndx_core::models::case::CaseRecord;
use ts_rs::TS;

/// Fewer cases than this and no pattern is reported.
pub const MIN_CASES: usize = 10;
/// Only the most recent cases are considered.
pub const WINDOW: usize = 50;
/// Distinct common symptoms needed to raise an alert.
pub const MIN_COMMON_SYMPTOMS: usize = 2;
/// At most this many symptoms are named in an alert.
pub const MAX_FLAGGED: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutbreakStatus {
    InsufficientData,
    Clear,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutbreakReport {
    pub status: OutbreakStatus,
    pub message: String,
    pub flagged_symptoms: Vec<String>,
}

impl OutbreakReport {
    fn insufficient() -> Self {
        Self {
            status: OutbreakStatus::InsufficientData,
            message: "Insufficient data for outbreak detection".to_string(),
            flagged_symptoms: Vec::new(),
        }
    }

    fn clear() -> Self {
        Self {
            status: OutbreakStatus::Clear,
            message: "No outbreak patterns detected".to_string(),
            flagged_symptoms: Vec::new(),
        }
    }

    fn alert(flagged_symptoms: Vec<String>) -> Self {
        Self {
            status: OutbreakStatus::Alert,
            message: format!(
                "Potential outbreak pattern detected: {}",
                flagged_symptoms.join(", ")
            ),
            flagged_symptoms,
        }
    }
}

/// Symptoms present in more than 30% of `window`, most frequent first,
/// ties broken by label.
pub fn common_symptoms(window: &[CaseRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in window {
        for label in record.symptom_labels() {
            *counts.entry(label).or_default() += 1;
        }
    }

    let mut common: Vec<(String, usize)> = counts
        .into_iter()
        // count > 0.3 * window, kept in integers
        .filter(|&(_, count)| count * 10 > window.len() * 3)
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    // BTreeMap iteration is label-ascending and the sort is stable.
    common.sort_by(|a, b| b.1.cmp(&a.1));
    common
}

/// Check the recent history for clusters of repeated symptoms. Never fails.
pub fn detect_outbreak(history: &[CaseRecord]) -> OutbreakReport {
    if history.len() < MIN_CASES {
        return OutbreakReport::insufficient();
    }

    let window = &history[history.len().saturating_sub(WINDOW)..];
    let common = common_symptoms(window);

    if common.len() >= MIN_COMMON_SYMPTOMS {
        OutbreakReport::alert(
            common
                .into_iter()
                .take(MAX_FLAGGED)
                .map(|(label, _)| label)
                .collect(),
        )
    } else {
        OutbreakReport::clear()
    }
}
