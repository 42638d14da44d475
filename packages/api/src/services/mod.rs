//! Domain services over the relational store.
//!
//! Route handlers stay thin: validation, occurrence generation, ledger
//! accounting and redemption policy all live here and return the domain
//! error taxonomy below.

use thiserror::Error;

use crate::error::ApiError;

pub mod chores;
pub mod meals;
pub mod points;
pub mod rewards;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced entity does not exist. Surfaced as a user-visible
    /// message, never fatal.
    #[error("{0}")]
    NotFound(String),

    /// Caught before any mutation; no partial state is written.
    #[error("{0}")]
    Validation(String),

    /// Redemption cost exceeds the current balance; nothing is debited.
    #[error("insufficient points: balance is {balance}, cost is {cost}")]
    InsufficientBalance { balance: i64, cost: i64 },

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => ApiError::not_found(msg),
            ServiceError::Validation(msg) => ApiError::bad_request(msg),
            err @ ServiceError::InsufficientBalance { .. } => ApiError::conflict(err.to_string()),
            ServiceError::Db(db_err) => db_err.into(),
        }
    }
}

impl From<sea_orm::TransactionError<ServiceError>> for ServiceError {
    fn from(err: sea_orm::TransactionError<ServiceError>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(db_err) => ServiceError::Db(db_err),
            sea_orm::TransactionError::Transaction(service_err) => service_err,
        }
    }
}
