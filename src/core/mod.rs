//! Core business logic module
//!
//! This module contains the account and transfer services:
//! - `traits` - Seams for the transactional store and credential hasher
//! - `auth` - Registration and login
//! - `transfer` - Atomic balance transfers
//! - `admin` - Status updates, deletion, and administrative lookups

pub mod admin;
pub mod auth;
pub mod traits;
pub mod transfer;

pub use admin::AccountAdmin;
pub use auth::AuthService;
pub use traits::{CredentialHasher, StoreTransaction, TransactionalStore};
pub use transfer::TransferEngine;
