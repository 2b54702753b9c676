//! Core error types for the Cambist engine.
//!
//! This module defines store-agnostic error types. Store-specific
//! failures (lock poisoning, I/O, database drivers) are converted into
//! `PersistenceError` by the store layer, keeping infrastructure faults
//! distinct from validation outcomes.

use thiserror::Error;

use crate::exchange::ValidationError;
use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Exchange validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for balance and counter store operations.
///
/// This enum uses `String` for all error details, allowing a store
/// implementation to convert its own failures (poisoned locks, SQLite,
/// file I/O, ...) into this format.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A store read or write failed to execute.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// A multi-step store mutation could not be applied as a unit.
    #[error("Store transaction failed: {0}")]
    TransactionFailed(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
