//! Mapping from the core error taxonomy onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use mockbase_core::Error;

/// Response wrapper for [`Error`].
///
/// Malformed payloads and validation failures are 400, unknown ids are 404,
/// anything unexpected is a 500 whose body never leaks internal detail.
/// Every error body has the shape `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(Error);

impl ApiError {
    /// The wrapped core error.
    pub fn inner(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

/// An unparseable request body is a MalformedRequest, kept distinct from
/// field validation failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Error::malformed(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Malformed { .. } | Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self.0 {
            Error::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
