use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use syndx_core::error::CoreError;
use syndx_rules::error::RuleError;
use thiserror::Error;

/// Errors a handler can return. All of them are the caller's input; the
/// case log failing never fails a request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Intake(#[from] RuleError),

    #[error(transparent)]
    Vocabulary(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejected request");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
