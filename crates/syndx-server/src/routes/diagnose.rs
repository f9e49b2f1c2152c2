use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::pipeline::{self, DiagnoseRequest, Diagnosis};
use crate::state::AppState;

/// `201 Created` once the case is logged. `200 OK` with `persisted: false`
/// when the case log could not be written; the diagnosis is still returned.
pub async fn diagnose(
    State(state): State<AppState>,
    Json(body): Json<DiagnoseRequest>,
) -> Result<(StatusCode, Json<Diagnosis>), ApiError> {
    let diagnosis = pipeline::diagnose(
        &state.case_log,
        state.advisor.as_ref(),
        state.advisory_timeout,
        &body,
    )
    .await?;
    let status = if diagnosis.persisted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(diagnosis)))
}
