//! # REST API Errors
//!
//! Every client-facing error renders the same envelope:
//! `{"errors": ["<message>"]}`, always with exactly one message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::StorageError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestError {
    /// No record carries the requested identifier
    #[error("Not found for id of: {id}")]
    NotFound { id: String },

    /// No handler matches the request path
    #[error("Route not found")]
    RouteNotFound,

    /// Body declared as JSON that does not parse
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// Internal failure while touching the record store
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::RouteNotFound => StatusCode::NOT_FOUND,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => RestError::NotFound { id },
            other => RestError::Internal(other.to_string()),
        }
    }
}

/// Error envelope body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<String>,
}

impl ErrorEnvelope {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

impl From<&RestError> for ErrorEnvelope {
    fn from(err: &RestError) -> Self {
        Self::single(err.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        if let RestError::Internal(reason) = &self {
            tracing::error!(%reason, "request failed");
        }

        let status = self.status_code();
        let body = Json(ErrorEnvelope::from(&self));
        (status, body).into_response()
    }
}
