//! HTTP error handling and conversion.
//!
//! Every error body has the shape `{ "message": "error: ..." }`. Input errors
//! carry their own message; database failures are logged in full and
//! answered with a generic one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hospital_query_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid path parameter
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Database or connection failure
    #[error(transparent)]
    Infrastructure(#[from] hospital_query_infrastructure::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        let status = match self {
            Self::Domain(err) => err.http_status(),
            Self::Infrastructure(err) => err.http_status(),
        };
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Message shown to the client, without the `error: ` prefix
    pub fn public_message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::Infrastructure(_) if self.status_code() == StatusCode::SERVICE_UNAVAILABLE => {
                "Service unavailable.".to_string()
            }
            Self::Infrastructure(_) => "Internal server error.".to_string(),
        }
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, prefixed with `error: `
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl AsRef<str>) -> Self {
        Self {
            message: format!("error: {}", message.as_ref()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Domain(err) => {
                tracing::debug!(error = %err, code = err.error_code(), "Rejected request")
            }
            Self::Infrastructure(err) => {
                tracing::error!(error = %err, status = %status, "Query failed")
            }
        }

        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_query_infrastructure::Error as InfraError;

    #[test]
    fn test_domain_errors_are_bad_requests() {
        let err = ApiError::from(DomainError::BedNotANumber);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorResponse::new(err.public_message()).message,
            "error: Bed parameter must be a number."
        );
    }

    #[test]
    fn test_database_errors_hide_details() {
        let err = ApiError::from(InfraError::Configuration("bad connect string".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error.");
    }

    #[test]
    fn test_timeouts_are_unavailable() {
        let err = ApiError::from(InfraError::Timeout("connect".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.public_message(), "Service unavailable.");
    }
}
