//! # Services
//!
//! Operations that span more than one store.
//!
//! - [`transaction::TransactionEngine`] - prices and atomically records sales
//! - [`report::ReportAggregator`] - turns report requests into store queries
//!
//! Single-table product and category CRUD has no service; handlers call the
//! stores directly.

pub mod report;
pub mod transaction;

use kasir_core::{CoreError, ValidationError};
use kasir_db::DbError;
use thiserror::Error;

pub use report::ReportAggregator;
pub use transaction::TransactionEngine;

/// Failure of a service operation: either a domain rule or the store.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DbError),
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Core(CoreError::Validation(err))
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
