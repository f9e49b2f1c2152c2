use axum::Json;
use axum::extract::{Query, State};
use jiff::Timestamp;
use serde::Deserialize;
use syndx_core::models::case::CaseRecord;
use syndx_core::models::triage::TriageLevel;
use syndx_surveillance::{between, search};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CaseQuery {
    /// Case-insensitive substring matched against every field.
    #[serde(default)]
    pub q: String,
    /// Comma-separated triage levels, e.g. `RED,YELLOW`.
    #[serde(default)]
    pub triage: Option<String>,
    /// Inclusive lower bound on the case timestamp.
    #[serde(default)]
    pub from: Option<Timestamp>,
    /// Exclusive upper bound on the case timestamp.
    #[serde(default)]
    pub to: Option<Timestamp>,
}

fn parse_levels(raw: Option<&str>) -> Result<Vec<TriageLevel>, ApiError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<TriageLevel>().map_err(ApiError::from))
        .collect()
}

pub async fn list_cases(
    State(state): State<AppState>,
    Query(query): Query<CaseQuery>,
) -> Result<Json<Vec<CaseRecord>>, ApiError> {
    let levels = parse_levels(query.triage.as_deref())?;
    let history = state.case_log.snapshot().await;

    let window: Vec<CaseRecord> = match (query.from, query.to) {
        (None, None) => history.records().to_vec(),
        (from, to) => between(
            history.records(),
            from.unwrap_or(Timestamp::MIN),
            to.unwrap_or(Timestamp::MAX),
        )
        .into_iter()
        .cloned()
        .collect(),
    };

    let cases = search(&window, &query.q, &levels)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(cases))
}
