//! Error types for the Taka core
//!
//! This module defines all error kinds that can surface from registration,
//! login, transfers, and account administration.
//!
//! # Error Categories
//!
//! - **Validation errors**: malformed input, non-positive amounts, self-transfer
//! - **Credential errors**: login or transfer PIN mismatch
//! - **Lookup errors**: sender/receiver/account absent
//! - **Business-rule errors**: insufficient balance, duplicate contact channel
//! - **Store errors**: transaction abort, connectivity loss
//!
//! Validation and business-rule errors are deterministic and surfaced directly
//! to the caller. Store errors are surfaced as generic failures with the
//! guarantee that no partial state was left behind.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the account and transfer core
///
/// Each variant carries enough context to diagnose the failure without
/// exposing anything secret: credential values and hashes never appear in
/// error messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Malformed or rejected input
    ///
    /// Covers empty credentials, missing contact channels, non-positive
    /// amounts, and negative opening balances.
    #[error("Validation failed: {reason}")]
    Validation {
        /// What was wrong with the input
        reason: String,
    },

    /// Login or transfer credential did not verify
    ///
    /// Deliberately identical for "no such account" and "wrong PIN" during
    /// login, so the response cannot be used to enumerate identifiers.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// No account matches the sender identifier of a transfer
    #[error("Sender account not found for identifier '{identifier}'")]
    SenderNotFound {
        /// The identifier that matched no account
        identifier: String,
    },

    /// No account matches the receiver identifier of a transfer
    #[error("Receiver account not found for identifier '{identifier}'")]
    ReceiverNotFound {
        /// The identifier that matched no account
        identifier: String,
    },

    /// No account matches the given id or identifier
    #[error("Account not found")]
    NotFound,

    /// A contact channel is already claimed by another account
    ///
    /// Registration-time conflict; two concurrent registrations with the
    /// same channel resolve with exactly one of them receiving this error.
    #[error("Contact channel '{channel}' is already registered")]
    Conflict {
        /// The channel that was already taken
        channel: String,
    },

    /// Sender balance does not cover the requested amount
    ///
    /// The transfer is rejected and no balance changes.
    #[error("Insufficient balance: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Sender balance at the time of the check
        available: Decimal,
        /// Amount the transfer asked for
        requested: Decimal,
    },

    /// Transfer rejected by a business rule other than balance
    ///
    /// Currently this means sender and receiver are the same account.
    #[error("Invalid transfer: {reason}")]
    InvalidTransfer {
        /// Why the transfer was rejected
        reason: String,
    },

    /// The transactional scope aborted after preconditions passed
    ///
    /// Neither balance changed; the caller may retry.
    #[error("Transfer failed and was rolled back: {reason}")]
    TransferFailed {
        /// Why the transaction aborted
        reason: String,
    },

    /// The store could not be reached or refused the operation
    #[error("Store unavailable: {reason}")]
    StoreUnavailable {
        /// Description of the store failure
        reason: String,
    },

    /// Credential hashing or verification failed internally
    ///
    /// Distinct from `InvalidCredentials`: this is an operational fault
    /// (e.g. a corrupt stored hash), not a wrong PIN.
    #[error("Credential hashing failed")]
    HashingFailed,
}

// Helper functions for creating common errors

impl CoreError {
    /// Create a Validation error
    pub fn validation(reason: impl Into<String>) -> Self {
        CoreError::Validation {
            reason: reason.into(),
        }
    }

    /// Create a SenderNotFound error
    pub fn sender_not_found(identifier: impl Into<String>) -> Self {
        CoreError::SenderNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a ReceiverNotFound error
    pub fn receiver_not_found(identifier: impl Into<String>) -> Self {
        CoreError::ReceiverNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a Conflict error
    pub fn conflict(channel: impl Into<String>) -> Self {
        CoreError::Conflict {
            channel: channel.into(),
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(available: Decimal, requested: Decimal) -> Self {
        CoreError::InsufficientBalance {
            available,
            requested,
        }
    }

    /// Create an InvalidTransfer error
    pub fn invalid_transfer(reason: impl Into<String>) -> Self {
        CoreError::InvalidTransfer {
            reason: reason.into(),
        }
    }

    /// Create a TransferFailed error
    pub fn transfer_failed(reason: impl Into<String>) -> Self {
        CoreError::TransferFailed {
            reason: reason.into(),
        }
    }

    /// Create a StoreUnavailable error
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        CoreError::StoreUnavailable {
            reason: reason.into(),
        }
    }

    /// Whether this error is deterministic for the given input
    ///
    /// Deterministic errors (validation, lookup, credential, business-rule)
    /// will recur on retry with the same input; only operational faults
    /// (transaction aborts, store loss, hashing failures) are transient
    /// and worth an operator's attention.
    pub fn is_deterministic(&self) -> bool {
        !matches!(
            self,
            CoreError::TransferFailed { .. }
                | CoreError::StoreUnavailable { .. }
                | CoreError::HashingFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::validation(
        CoreError::Validation { reason: "pin must not be empty".to_string() },
        "Validation failed: pin must not be empty"
    )]
    #[case::invalid_credentials(
        CoreError::InvalidCredentials,
        "Invalid login credentials"
    )]
    #[case::sender_not_found(
        CoreError::SenderNotFound { identifier: "123".to_string() },
        "Sender account not found for identifier '123'"
    )]
    #[case::receiver_not_found(
        CoreError::ReceiverNotFound { identifier: "a@b.c".to_string() },
        "Receiver account not found for identifier 'a@b.c'"
    )]
    #[case::conflict(
        CoreError::Conflict { channel: "123".to_string() },
        "Contact channel '123' is already registered"
    )]
    #[case::insufficient_balance(
        CoreError::InsufficientBalance { available: Decimal::new(500, 1), requested: Decimal::new(800, 1) },
        "Insufficient balance: available 50.0, requested 80.0"
    )]
    #[case::invalid_transfer(
        CoreError::InvalidTransfer { reason: "sender and receiver are the same account".to_string() },
        "Invalid transfer: sender and receiver are the same account"
    )]
    #[case::transfer_failed(
        CoreError::TransferFailed { reason: "commit aborted".to_string() },
        "Transfer failed and was rolled back: commit aborted"
    )]
    #[case::store_unavailable(
        CoreError::StoreUnavailable { reason: "connection reset".to_string() },
        "Store unavailable: connection reset"
    )]
    fn test_error_display(#[case] error: CoreError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::validation(CoreError::validation("x"), true)]
    #[case::invalid_credentials(CoreError::InvalidCredentials, true)]
    #[case::not_found(CoreError::NotFound, true)]
    #[case::insufficient(
        CoreError::insufficient_balance(Decimal::ZERO, Decimal::ONE),
        true
    )]
    #[case::transfer_failed(CoreError::transfer_failed("abort"), false)]
    #[case::store_unavailable(CoreError::store_unavailable("down"), false)]
    #[case::hashing_failed(CoreError::HashingFailed, false)]
    fn test_is_deterministic(#[case] error: CoreError, #[case] expected: bool) {
        assert_eq!(error.is_deterministic(), expected);
    }

    #[rstest]
    #[case::conflict(
        CoreError::conflict("123"),
        CoreError::Conflict { channel: "123".to_string() }
    )]
    #[case::sender_not_found(
        CoreError::sender_not_found("123"),
        CoreError::SenderNotFound { identifier: "123".to_string() }
    )]
    #[case::insufficient_balance(
        CoreError::insufficient_balance(Decimal::new(100, 0), Decimal::new(200, 0)),
        CoreError::InsufficientBalance { available: Decimal::new(100, 0), requested: Decimal::new(200, 0) }
    )]
    fn test_helper_functions(#[case] result: CoreError, #[case] expected: CoreError) {
        assert_eq!(result, expected);
    }
}
