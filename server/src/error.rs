//! API Errors
//!
//! Every failure leaves the server as `{"message": "..."}` with a status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use roadmap_domain::DomainError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Body validation failure. Details go to the log, not the client.
    pub fn invalid_feature(detail: impl std::fmt::Display) -> Self {
        tracing::debug!(%detail, "rejected feature payload");
        ApiError::BadRequest("Invalid feature data".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::InvalidInput(msg) => ApiError::invalid_feature(msg),
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        assert_eq!(ApiError::from(DomainError::NotFound("x".into())).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(DomainError::InvalidInput("x".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(DomainError::Internal("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_input_hides_detail() {
        let err = ApiError::from(DomainError::InvalidInput("percentComplete must be <= 100".into()));
        assert_eq!(err.to_string(), "Invalid feature data");
    }
}
