use rust_decimal::Decimal;
use thiserror::Error;

/// Broad classes of failure, used by front ends to pick a message tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was well formed but the amounts or accounts don't allow it.
    Validation,
    /// Unknown account number or wrong secret, deliberately not told apart.
    Authentication,
    /// The session is in the wrong state for the operation.
    Session,
    Internal,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("invalid amount {0}: must be strictly positive")]
    InvalidAmount(Decimal),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("balance would exceed the largest representable amount")]
    BalanceOverflow,
    #[error("unknown account {0}")]
    UnknownAccount(String),
    #[error("opening balance cannot be negative: {0}")]
    NegativeOpeningBalance(Decimal),
    #[error("no account numbers left in this bank")]
    AccountNumbersExhausted,
    #[error("invalid account number: must be 6 digits (0-9)")]
    InvalidAccountNumber,
    #[error("failed to seal credential: {0}")]
    Credential(String),
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("no account is logged in")]
    NotLoggedIn,
    #[error("an account is already logged in")]
    AlreadyLoggedIn,
}

impl BankError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::InvalidAmount(_)
            | BankError::InsufficientFunds { .. }
            | BankError::BalanceOverflow
            | BankError::UnknownAccount(_)
            | BankError::NegativeOpeningBalance(_)
            | BankError::AccountNumbersExhausted
            | BankError::InvalidAccountNumber => ErrorKind::Validation,
            BankError::AuthenticationFailed => ErrorKind::Authentication,
            BankError::NotLoggedIn | BankError::AlreadyLoggedIn => ErrorKind::Session,
            BankError::Credential(_) => ErrorKind::Internal,
        }
    }
}
