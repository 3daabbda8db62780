use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the store and dispatcher layers.
#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No expense found with ID: {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = StdResult<T, ExpenseError>;

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}
