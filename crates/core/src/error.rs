//! Domain error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is terminal for the operation that produced it: nothing has
/// been mutated when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No account is registered under the requested tax id.
    #[error("account not found")]
    NotFound,

    /// An account with this tax id already exists.
    #[error("an account with tax id {0} already exists")]
    DuplicateTaxId(String),

    /// The withdrawal exceeds the current balance.
    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    /// Shared state became unusable (e.g. a poisoned lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_tax_id(tax_id: impl Into<String>) -> Self {
        Self::DuplicateTaxId(tax_id.into())
    }

    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        Self::InsufficientFunds { balance, requested }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
