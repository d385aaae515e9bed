//! Error-to-response mapping.
//!
//! Client-facing variants return a bare `{message}` body; everything else
//! collapses to a 500 with the cause in `detail`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hireflow_domain::HireflowError;
use serde_json::json;
use tracing::error;

/// Wrapper that lets handlers return domain errors with `?`.
pub struct ApiError(pub HireflowError);

impl From<HireflowError> for ApiError {
    fn from(value: HireflowError) -> Self {
        ApiError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            HireflowError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            HireflowError::Auth(message) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
            }
            HireflowError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            other => {
                error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": "An unexpected error occurred",
                        "detail": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
