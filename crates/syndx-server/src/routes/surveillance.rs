use axum::Json;
use axum::extract::State;
use syndx_surveillance::{OutbreakReport, OutbreakStatus, SurveillanceSummary, detect_outbreak, summarize};

use crate::state::AppState;

pub async fn outbreak(State(state): State<AppState>) -> Json<OutbreakReport> {
    let history = state.case_log.snapshot().await;
    let report = detect_outbreak(history.records());
    if report.status == OutbreakStatus::Alert {
        tracing::warn!(
            symptoms = ?report.flagged_symptoms,
            cases = history.len(),
            "outbreak pattern flagged"
        );
    }
    Json(report)
}

pub async fn summary(State(state): State<AppState>) -> Json<SurveillanceSummary> {
    let history = state.case_log.snapshot().await;
    Json(summarize(history.records()))
}
