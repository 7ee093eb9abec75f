//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kasir API                              │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                     │
//! │         │                                                               │
//! │         ├── ValidationError / bad path id / bad JSON ──► 400            │
//! │         ├── CoreError::ProductNotFound (checkout item) ─► 400            │
//! │         ├── DbError::NotFound ─────────────────────────► 404            │
//! │         ├── DbError constraint violations ─────────────► 400            │
//! │         └── any other DbError ─────────────────────────► 500            │
//! │                                                                         │
//! │  Body on every failure:  {"error": "<message>"}                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store messages are passed through to the client unchanged.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

use kasir_core::{CoreError, ValidationError};
use kasir_db::DbError;

use crate::services::ServiceError;

/// Error returned from handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Malformed or invalid client input (400).
    #[error("{0}")]
    Validation(String),

    /// The addressed entity does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure (500).
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(%status, "Request failed: {}", message);
        } else {
            warn!(%status, "Request rejected: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::Validation(err.to_string()),
            CoreError::Validation(err) => err.into(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. }
            | DbError::ForeignKeyViolation { .. }
            | DbError::ConstraintViolation { .. } => ApiError::Validation(err.to_string()),
            _ => ApiError::Store(err.to_string()),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => err.into(),
            ServiceError::Store(err) => err.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody {
            reason: rejection.body_text(),
        }
        .into()
    }
}
