//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use jotter_domain::error::JotterError;

/// JSON error body returned by all endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`JotterError`] to an HTTP response with appropriate status code.
pub struct ApiError(JotterError);

impl From<JotterError> for ApiError {
    fn from(err: JotterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            JotterError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            JotterError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            JotterError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
