//! HTTP error response mapping.

use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cafehub_domain::error::{CafeHubError, NotFoundError, ValidationError, WriteError};

/// Description returned when a path id matches no record.
pub const UNKNOWN_ID: &str = "This ID Does not Exist.";

/// Description returned when a read finds no records at all.
pub const NO_CAFES: &str = "No cafes found in the database";

const NOT_AUTHORIZED: &str = "Not Authorized to perform this action.";

/// Inner object of an error body, keyed by its category.
#[derive(Debug, Serialize)]
pub enum ErrorDetail {
    #[serde(rename = "Not Found")]
    NotFound(String),
    #[serde(rename = "error")]
    Error(String),
}

/// JSON error body returned by API endpoints: `{"error": {<category>: <message>}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: ErrorDetail,
}

impl ErrorBody {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail::NotFound(message.into()),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail::Error(message.into()),
        }
    }
}

/// Maps [`CafeHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(CafeHubError);

impl ApiError {
    /// Request parameters that could not be decoded at all.
    pub(crate) fn malformed(reason: impl fmt::Display) -> Self {
        tracing::debug!(%reason, "rejected undecodable request parameters");
        Self(ValidationError::Malformed.into())
    }
}

impl From<CafeHubError> for ApiError {
    fn from(err: CafeHubError) -> Self {
        Self(err)
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            CafeHubError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorBody::not_found(UNKNOWN_ID))
            }
            CafeHubError::Validation(err) => {
                (StatusCode::BAD_REQUEST, ErrorBody::error(err.to_string()))
            }
            CafeHubError::Write(err) => {
                if let WriteError::Database(source) = err {
                    tracing::error!(error = %source, "write rejected by database");
                }
                (StatusCode::BAD_REQUEST, ErrorBody::error(err.to_string()))
            }
            CafeHubError::Unauthorized => {
                (StatusCode::FORBIDDEN, ErrorBody::error(NOT_AUTHORIZED))
            }
            CafeHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::error("internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
