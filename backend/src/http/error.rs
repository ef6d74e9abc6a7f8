//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::SchemaError;
use crate::error::OpeningHoursError;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Body is not valid JSON or violates a field constraint.
    Schema(SchemaError),
    /// Body is well-formed but does not describe a valid week.
    OpeningHours(OpeningHoursError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Schema(_) | AppError::OpeningHours(OpeningHoursError::IncompleteWeek) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::OpeningHours(OpeningHoursError::InvalidSequence { .. }) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn body(&self) -> ApiError {
        match self {
            AppError::Schema(e) => {
                ApiError::new("VALIDATION_ERROR", e.source.to_string()).with_details(e.path.clone())
            }
            AppError::OpeningHours(e @ OpeningHoursError::IncompleteWeek) => {
                ApiError::new("INCOMPLETE_WEEK", e.to_string())
            }
            AppError::OpeningHours(e @ OpeningHoursError::InvalidSequence { day, .. }) => {
                ApiError::new("INVALID_SEQUENCE", e.to_string()).with_details(day.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<SchemaError> for AppError {
    fn from(err: SchemaError) -> Self {
        AppError::Schema(err)
    }
}

impl From<OpeningHoursError> for AppError {
    fn from(err: OpeningHoursError) -> Self {
        AppError::OpeningHours(err)
    }
}
