//! Account-related types for the Taka core
//!
//! This module defines the Account entity and the registration request
//! used to create one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account identifier
///
/// Assigned by the store at insert time, immutable afterwards.
pub type AccountId = Uuid;

/// Lifecycle status of an account
///
/// Mutated only through account administration. New accounts start
/// as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Registered but not yet verified
    Pending,

    /// Verified by an administrator
    Verified,

    /// Suspended; profile is retained but the account is flagged
    Suspended,
}

/// A stored account
///
/// The central entity of the system: identity, contact channels,
/// credential hash, and balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned unique identifier
    pub id: AccountId,

    /// Display name; opaque profile metadata, stored and returned verbatim
    pub name: String,

    /// Email contact channel, unique across all accounts when present
    pub email: Option<String>,

    /// Phone contact channel, unique across all accounts when present
    pub phone: Option<String>,

    /// One-way hash of the account PIN (PHC string format)
    ///
    /// Never serialized outward and never logged. The plaintext PIN is
    /// never stored anywhere.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub credential_hash: String,

    /// Current balance in taka
    ///
    /// Non-negative at all times. Mutated only by the transfer engine,
    /// apart from the initial value supplied at registration.
    pub balance: Decimal,

    /// Lifecycle status, mutated only by account administration
    pub status: AccountStatus,

    /// Opaque role metadata (e.g. "user", "agent"), stored verbatim
    pub role: Option<String>,
}

impl Account {
    /// Iterate over the contact channels configured for this account
    pub fn contact_channels(&self) -> impl Iterator<Item = &str> {
        self.email
            .as_deref()
            .into_iter()
            .chain(self.phone.as_deref())
    }
}

/// Registration request for a new account
///
/// Carries the plaintext PIN exactly once, on the way into the
/// authentication service, which hashes it before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Email contact channel
    #[serde(default)]
    pub email: Option<String>,

    /// Phone contact channel
    #[serde(default, alias = "number")]
    pub phone: Option<String>,

    /// Plaintext PIN; must be non-empty
    pub pin: String,

    /// Opening balance; defaults to zero, must not be negative
    #[serde(default)]
    pub initial_balance: Option<Decimal>,

    /// Opaque role metadata
    #[serde(default)]
    pub role: Option<String>,
}
