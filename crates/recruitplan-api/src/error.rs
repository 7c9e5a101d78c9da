use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use recruitplan_core::error::ValidationError;
use recruitplan_engine::EngineError;
use recruitplan_reference::error::ReferenceError;

/// Planner request failures.
///
/// Invalid planning input keeps its structured [`ValidationError`] so the
/// client can point at the offending dimension or subgroup.
#[derive(Debug)]
pub enum ApiError {
    /// The requested disease, trial, or time period has no reference data.
    NotFound(String),
    Invalid(ValidationError),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<ValidationError>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Invalid(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Invalid(issue) => ErrorBody {
                error: issue.to_string(),
                issue: Some(issue),
            },
            ApiError::NotFound(error) | ApiError::BadRequest(error) => {
                ErrorBody { error, issue: None }
            }
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "reference data unusable");
                ErrorBody {
                    error: "internal server error".to_string(),
                    issue: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Invalid(e)
    }
}

impl From<ReferenceError> for ApiError {
    fn from(e: ReferenceError) -> Self {
        match e {
            ReferenceError::UnknownDisease(_)
            | ReferenceError::UnknownTrial { .. }
            | ReferenceError::UnknownTimePeriod { .. } => ApiError::NotFound(e.to_string()),
            ReferenceError::UnknownAgeBand { .. } => ApiError::BadRequest(e.to_string()),
            ReferenceError::Incomplete { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Validation(e) => e.into(),
            EngineError::Reference(e) => e.into(),
        }
    }
}
