//! HTTP error mapping.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paws_core::errors::CoreError;
use paws_core::responses::ErrorBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A domain error from a reducer or board.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request was rejected before reaching the domain layer.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Core(CoreError::InvalidTransition { .. }) => StatusCode::CONFLICT,
            Self::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::CapacityExceeded { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Core(CoreError::Other(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!(error = %rejection, "unparseable path segment");
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Core(CoreError::Validation(message)) => message.clone(),
            Self::Core(CoreError::Other(error)) => {
                tracing::error!(%error, "unhandled error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(CoreError::not_found("report", 1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::invalid_transition("report", 1, "resolved", "in_progress"))
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(CoreError::Validation("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::capacity_exceeded("report", 10)).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::bad_request("No image provided").status(),
            StatusCode::BAD_REQUEST
        );
    }
}
