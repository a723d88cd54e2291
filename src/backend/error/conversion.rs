/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers and the
 * auth gate can return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "DuplicateUsername",
 *   "message": "Username already exists",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub status: u16,
}

impl From<&BackendError> for ErrorBody {
    fn from(err: &BackendError) -> Self {
        Self {
            error: err.kind(),
            message: err.message(),
            status: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
