use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use syndx_core::models::case::CaseRecord;
use syndx_core::models::patient::Sex;
use syndx_core::models::triage::TriageLevel;
use ts_rs::TS;

use crate::outbreak::{OutbreakReport, detect_outbreak};

pub const TOP_OCCUPATIONS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageDistribution {
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
}

/// Aggregate figures for a surveillance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurveillanceSummary {
    pub total_cases: usize,
    pub female: usize,
    pub male: usize,
    pub mean_age: Option<f64>,
    pub mean_triage_score: Option<f64>,
    pub top_occupations: Vec<String>,
    pub triage: TriageDistribution,
    pub first_case: Option<jiff::Timestamp>,
    pub last_case: Option<jiff::Timestamp>,
    pub outbreak: OutbreakReport,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

fn top_occupations(history: &[CaseRecord]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in history {
        *counts.entry(record.occupation.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(TOP_OCCUPATIONS)
        .map(|(o, _)| o.to_string())
        .collect()
}

pub fn summarize(history: &[CaseRecord]) -> SurveillanceSummary {
    let mut triage = TriageDistribution::default();
    for record in history {
        match record.triage {
            TriageLevel::Red => triage.red += 1,
            TriageLevel::Yellow => triage.yellow += 1,
            TriageLevel::Green => triage.green += 1,
        }
    }

    SurveillanceSummary {
        total_cases: history.len(),
        female: history.iter().filter(|r| r.sex == Sex::Female).count(),
        male: history.iter().filter(|r| r.sex == Sex::Male).count(),
        mean_age: mean(history.iter().map(|r| f64::from(r.age))),
        mean_triage_score: mean(history.iter().map(|r| f64::from(r.triage_score))),
        top_occupations: top_occupations(history),
        triage,
        first_case: history.iter().map(|r| r.timestamp).min(),
        last_case: history.iter().map(|r| r.timestamp).max(),
        outbreak: detect_outbreak(history),
    }
}
