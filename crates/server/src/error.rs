//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`. Every error response is a JSON object with a single
//! `message` field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use homestead_core::ValidationError;

use crate::db::RepositoryError;

/// Message returned for any rejected create payload.
pub const INVALID_PROPERTY_DATA: &str = "Invalid property data";

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload parsed but failed domain validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Body was not valid JSON or didn't match the schema.
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(e) => Self::Validation(e),
            e @ RepositoryError::IdsExhausted => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Client error");
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal or parser details to clients
        let message = match self {
            Self::NotFound(message) => message,
            Self::Validation(_) | Self::InvalidBody(_) => INVALID_PROPERTY_DATA.to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
