//! Core traits for credential hashing and transactional account storage
//!
//! This module defines the trait abstractions that keep the services
//! independent of any concrete store or hash function. The in-memory store
//! in [`crate::store`] is one implementation; a document database would be
//! another, plugged in without touching the services.

use crate::types::{Account, AccountId, AccountStatus, CoreError};
use async_trait::async_trait;

/// Trait for one-way credential hashing
///
/// `hash` produces a salted one-way hash of a plaintext secret; `verify`
/// checks a plaintext against a previously produced hash. Implementations
/// must be slow enough to resist offline brute force and must never make
/// the plaintext recoverable from the hash.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext secret, producing a self-describing hash string
    fn hash(&self, plaintext: &str) -> Result<String, CoreError>;

    /// Verify a plaintext secret against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for operational faults
    /// such as an unparseable stored hash.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, CoreError>;
}

/// View of the store inside a transactional scope
///
/// All reads observe committed state plus this scope's own staged writes.
/// Writes are staged and become visible to other callers only when the
/// scope commits; if the scope aborts, they are discarded entirely.
pub trait StoreTransaction {
    /// Read an account by id
    ///
    /// Returns the staged version if this scope already wrote it.
    fn get(&mut self, id: &AccountId) -> Result<Option<Account>, CoreError>;

    /// Stage a write of the given account
    fn put(&mut self, account: Account) -> Result<(), CoreError>;
}

/// Trait for transactional account persistence
///
/// The sole synchronization point of the system: the services hold no
/// mutable state of their own, and every invariant that spans accounts
/// (balance conservation, channel uniqueness) is enforced here.
#[async_trait]
pub trait TransactionalStore: Send + Sync {
    /// Insert a new account, enforcing contact-channel uniqueness
    ///
    /// Two concurrent inserts claiming the same channel must not both
    /// succeed; the loser receives [`CoreError::Conflict`].
    async fn insert_account(&self, account: Account) -> Result<Account, CoreError>;

    /// Look up an account by its store-assigned id
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, CoreError>;

    /// Look up the account whose contact channel set contains `identifier`
    async fn find_by_contact(&self, identifier: &str) -> Result<Option<Account>, CoreError>;

    /// All accounts, in no particular order
    async fn list_accounts(&self) -> Result<Vec<Account>, CoreError>;

    /// Set the status of the account matching `id`
    ///
    /// Fails with [`CoreError::NotFound`] if no account matches.
    async fn update_status(
        &self,
        id: &AccountId,
        status: AccountStatus,
    ) -> Result<Account, CoreError>;

    /// Remove the account matching `id`
    ///
    /// Returns whether an account was actually removed; deleting an absent
    /// id is a no-op returning `false`.
    async fn delete_account(&self, id: &AccountId) -> Result<bool, CoreError>;

    /// Run `f` inside a transactional scope
    ///
    /// Every write staged through the [`StoreTransaction`] view commits
    /// atomically when `f` returns `Ok`, and is discarded when it returns
    /// `Err`. Scopes touching the store are serialized with respect to one
    /// another, so a balance read inside the scope cannot go stale before
    /// the corresponding write commits.
    async fn with_transaction<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn StoreTransaction) -> Result<T, CoreError> + Send + 'static;
}
