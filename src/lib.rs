//! Taka Core Library
//! # Overview
//!
//! This library provides the account and transfer core of a mobile-money
//! style service: registration with hashed credentials, login, and atomic
//! peer-to-peer balance transfers.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransferReceipt, CoreError)
//! - [`core`] - Business logic components:
//!   - [`core::auth`] - Registration and login over the hasher seam
//!   - [`core::transfer`] - Atomic balance transfers
//!   - [`core::admin`] - Status updates, deletion, and lookups
//!   - [`core::traits`] - The transactional store and hasher seams
//! - [`store`] - Store implementations (in-memory, DashMap-backed)
//! - [`hasher`] - Argon2id credential hashing
//! - [`server`] - Axum HTTP surface over the services
//! - [`cli`] - Server argument parsing
//!
//! # Guarantees
//!
//! - A credential is hashed before anything is persisted and is never
//!   recoverable from the stored record
//! - A transfer debits and credits inside one transactional scope: both
//!   balances change or neither does
//! - Balances never go negative; the balance check is re-validated inside
//!   the transactional scope, so concurrent transfers cannot double-spend
//! - The sum of balances is invariant across any transfer

// Module declarations
pub mod cli;
pub mod core;
pub mod hasher;
pub mod server;
pub mod store;
pub mod types;

pub use crate::core::{
    AccountAdmin, AuthService, CredentialHasher, StoreTransaction, TransactionalStore,
    TransferEngine,
};
pub use hasher::Argon2Hasher;
pub use server::{ApiServer, AppState};
pub use store::MemoryStore;
pub use types::{
    Account, AccountId, AccountStatus, CoreError, RegisterRequest, TransferReceipt,
    TransferRequest,
};
