//! Error types for the API.
//!
//! Every failure leaves the dispatcher as a plain-text body with the status
//! code chosen here; handlers never write error responses themselves.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use common::StateError;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400) - unreadable body, malformed or rejected configuration
    #[error("{0}")]
    BadRequest(String),

    /// Not found (404) - no repository for the path
    #[error("{0}")]
    NotFound(String),

    /// Method not allowed (405) - administrative endpoint called without POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Render failure (500) - a template failed to produce output
    #[error("{0}")]
    Render(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Convert `common::StateError` to `ApiError`.
///
/// Rejected configurations are the caller's fault (400); a missing path is
/// 404; failing to obtain a configuration at all is a server problem (500).
impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::InvalidConfiguration(reason) => ApiError::BadRequest(reason),
            e @ StateError::NotFound(_) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        ApiError::Render(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("failed to encode JSON: {}", err))
    }
}
