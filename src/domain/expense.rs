use std::{fmt, result::Result as StdResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ExpenseError, Result};

/// Opaque identifier for an expense record. Generated once at creation and
/// immutable afterwards; the sole lookup key for update/delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Strictly positive monetary amount. The only way in is the fallible
/// constructor, so a stored `Amount` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl TryFrom<f64> for Amount {
    type Error = String;

    fn try_from(value: f64) -> StdResult<Self, Self::Error> {
        Amount::new(value).map_err(|err| err.to_string())
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Amount {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ExpenseError::Validation(
                "Amount must be a positive number.".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Parses user-supplied text, rejecting non-numeric input at the boundary.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: f64 = raw.trim().parse().map_err(|_| {
            ExpenseError::Validation("Amount must be a positive number.".into())
        })?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// One tracked spending record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(rename = "expense")]
    pub description: String,
    pub amount: Amount,
}

impl Expense {
    /// Builds a new record with a fresh id, validating the description.
    pub fn new(description: &str, amount: Amount) -> Result<Self> {
        let description = validate_description(description)?;
        Ok(Self {
            id: ExpenseId::generate(),
            description,
            amount,
        })
    }
}

pub fn validate_description(description: &str) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::Validation(
            "Expense description must be a non-empty string.".into(),
        ));
    }
    Ok(trimmed.to_string())
}
