//! Error and status envelopes for the JSON API.
//!
//! Every non-2xx answer (and the delete acknowledgement) is a
//! [`WrapperResponse`]: `{ "code": <status>, "message": <text> }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::category::CategoryError;

pub const DUPLICATE_MESSAGE: &str = "The entry that you are trying to insert, already exists";
pub const INTERNAL_MESSAGE: &str = "Internal error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperResponse {
    pub code: u16,
    pub message: String,
}

impl WrapperResponse {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { code: status.as_u16(), message: message.into() }
    }
}

/// Handler error rendered as a [`WrapperResponse`] with a matching status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(name) => {
                Self { status: StatusCode::NOT_FOUND, message: format!("category not found: {name}") }
            }
            CategoryError::Duplicate(_) => Self::bad_request(DUPLICATE_MESSAGE),
            CategoryError::Invalid(msg) => Self::bad_request(msg),
            CategoryError::Database(e) => {
                error!(error = %e, "category store query failed");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: INTERNAL_MESSAGE.to_owned() }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(WrapperResponse::new(self.status, self.message))).into_response()
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
