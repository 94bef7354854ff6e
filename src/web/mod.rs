//! HTTP surface of the employee service.
//!
//! Handlers return [`WebError`] on failure; its `IntoResponse` impl is the
//! single place where error kinds turn into status codes.

pub mod handlers;
pub mod router;
pub mod state;

use crate::core::{StoreError, ValidationError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub use router::build_router;
pub use state::AppState;

/// Message returned whenever an operation targets an absent id.
pub const EMPLOYEE_NOT_FOUND_MESSAGE: &str = "Employee does not exist.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub enum WebError {
    Input(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl WebError {
    /// Map a storage failure, naming the attempted `action` for internal errors.
    pub fn storage(action: &str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(EMPLOYEE_NOT_FOUND_MESSAGE.to_string()),
            StoreError::Conflict(msg) => {
                Self::Conflict(format!("Employee with ID already exists. Error: {msg}"))
            }
            StoreError::Database(err) => Self::Internal(format!("Error while {action}. Error: {err}")),
        }
    }
}

impl From<ValidationError> for WebError {
    fn from(err: ValidationError) -> Self {
        Self::Input(err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            WebError::Input(msg) => (StatusCode::BAD_REQUEST, msg, "input_error"),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "not_found"),
            WebError::Conflict(msg) => (StatusCode::CONFLICT, msg, "conflict"),
            WebError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "internal_error")
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
