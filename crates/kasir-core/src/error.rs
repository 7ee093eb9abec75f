//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                          │
//! │  ├── CoreError        - Domain failures (missing product, ...)          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  kasir-db errors (separate crate)                                       │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  kasir-api errors                                                       │
//! │  ├── ServiceError     - CoreError | DbError                             │
//! │  └── ApiError         - HTTP status + {"error": message}                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → ApiError → Client  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested line item references a product that does not exist.
    ///
    /// This is a client error (400 on checkout), not a server fault.
    #[error("product with ID {0} not found")]
    ProductNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any persistence happens and always map to HTTP 400.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a malformed date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A path segment that should be a numeric id is not one.
    #[error("Invalid {entity} ID")]
    InvalidId { entity: String },

    /// Transaction request without items.
    #[error("transaction must have at least one item")]
    EmptyTransaction,

    /// Report query without one of its dates.
    #[error("start_date and end_date are required (format: YYYY-MM-DD)")]
    MissingDateRange,

    /// Integer arithmetic would overflow.
    #[error("{field} is too large")]
    Overflow { field: String },

    /// Request body could not be decoded.
    #[error("Invalid request body: {reason}")]
    InvalidBody { reason: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidId error for an entity name ("product", "category", ...).
    pub fn invalid_id(entity: impl Into<String>) -> Self {
        ValidationError::InvalidId {
            entity: entity.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
