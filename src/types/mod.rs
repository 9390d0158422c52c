//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account entity, status, and registration request
//! - `transfer`: Transfer request and receipt
//! - `error`: Error types for the account and transfer core

pub mod account;
pub mod error;
pub mod transfer;

pub use account::{Account, AccountId, AccountStatus, RegisterRequest};
pub use error::CoreError;
pub use transfer::{TransferReceipt, TransferRequest};
