//! The module contains the errors the engine can return.
//!
//! Every error describes a rejected input: a submission that never reached the
//! store, or a budget table that could not be built. Once a transaction has
//! been accepted nothing downstream can fail.
//!
//! - [`MissingField`] a required form field was left empty.
//! - [`InvalidAmount`] the amount is not a positive decimal.
//! - [`CategoryMismatch`] the category is not allowed for the transaction kind.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`CategoryMismatch`]: EngineError::CategoryMismatch
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),
    #[error("Category mismatch: {0}")]
    CategoryMismatch(String),
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}
