//! RPC error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fairdraw_chain::ValidationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("server error: {0}")]
    Server(String),
}

/// JSON body for every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl RpcError {
    fn status(&self) -> StatusCode {
        match self {
            RpcError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            RpcError::Validation(_) => StatusCode::BAD_REQUEST,
            RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable tag for the error body.
    fn tag(&self) -> &'static str {
        match self {
            RpcError::SessionNotFound(_) => "session_not_found",
            RpcError::Validation(ValidationError::ContainsWhitespace) => "contains_whitespace",
            RpcError::Validation(ValidationError::MissingSecret) => "missing_secret",
            RpcError::Validation(ValidationError::InvalidRange { .. }) => "invalid_range",
            RpcError::Validation(ValidationError::InvalidCount(_)) => "invalid_count",
            RpcError::Server(_) => "server_error",
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.tag(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
