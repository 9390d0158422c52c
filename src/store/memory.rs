//! In-memory transactional account store
//!
//! This module provides `MemoryStore`, the process-local implementation of
//! [`TransactionalStore`]. It is the sole synchronization point of the
//! system: services hold no mutable state, and every cross-account invariant
//! is enforced here.
//!
//! # Design
//!
//! Accounts live in a `DashMap` keyed by id, with a second `DashMap` acting
//! as the contact-channel index. Registration claims channels through the
//! index's entry API, so two concurrent registrations of the same channel
//! resolve with exactly one winner.
//!
//! Transactional scopes serialize on a `tokio::sync::Mutex`. A scope stages
//! its writes in a private map; they are published to the account map only
//! after the scope body returns `Ok`. An `Err` from the body discards the
//! staged writes, so no partial state is ever observable. Because scopes are
//! serialized, a balance read inside a scope cannot be invalidated by
//! another transfer before the corresponding write commits.
//!
//! Status updates and deletions take the same lock. Commits publish whole
//! records, so an admin write interleaved with an open scope would be
//! overwritten at commit, losing the status change or resurrecting the
//! deleted account.

use crate::core::traits::{StoreTransaction, TransactionalStore};
use crate::types::{Account, AccountId, AccountStatus, CoreError};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Process-local account store
///
/// Opened once at process start, shared across requests, dropped at
/// shutdown. Cloning is not supported; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Account records by store-assigned id
    accounts: DashMap<AccountId, Account>,

    /// Contact channel -> owning account id
    ///
    /// Uniqueness of channels across the population is enforced by
    /// claiming entries here before the account record is inserted.
    contacts: DashMap<String, AccountId>,

    /// Serializes transactional scopes and whole-record admin writes
    ///
    /// Commits publish whole `Account` records, so status updates and
    /// deletions must not interleave with an open scope.
    txn_lock: Mutex<()>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accounts currently stored
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Transaction view over a `MemoryStore`
///
/// Reads see committed state overlaid with this scope's staged writes;
/// writes stay in `staged` until the scope commits.
struct MemoryTransaction<'a> {
    accounts: &'a DashMap<AccountId, Account>,
    staged: HashMap<AccountId, Account>,
}

impl StoreTransaction for MemoryTransaction<'_> {
    fn get(&mut self, id: &AccountId) -> Result<Option<Account>, CoreError> {
        if let Some(account) = self.staged.get(id) {
            return Ok(Some(account.clone()));
        }
        Ok(self.accounts.get(id).map(|entry| entry.value().clone()))
    }

    fn put(&mut self, account: Account) -> Result<(), CoreError> {
        self.staged.insert(account.id, account);
        Ok(())
    }
}

#[async_trait]
impl TransactionalStore for MemoryStore {
    async fn insert_account(&self, mut account: Account) -> Result<Account, CoreError> {
        account.id = Uuid::new_v4();

        let channels: Vec<String> = account.contact_channels().map(String::from).collect();

        // Claim each channel atomically through the entry API. On a clash,
        // release the channels claimed so far and report the conflict.
        for (index, channel) in channels.iter().enumerate() {
            let taken = match self.contacts.entry(channel.clone()) {
                Entry::Occupied(_) => true,
                Entry::Vacant(vacant) => {
                    vacant.insert(account.id);
                    false
                }
            };
            if taken {
                for earlier in &channels[..index] {
                    self.contacts.remove(earlier);
                }
                return Err(CoreError::conflict(channel.clone()));
            }
        }

        self.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, CoreError> {
        Ok(self.accounts.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_contact(&self, identifier: &str) -> Result<Option<Account>, CoreError> {
        let id = match self.contacts.get(identifier) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, CoreError> {
        Ok(self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update_status(
        &self,
        id: &AccountId,
        status: AccountStatus,
    ) -> Result<Account, CoreError> {
        // Runs under the scope lock: a commit re-inserts whole records, so
        // an update landing inside an open scope would be overwritten.
        let _scope = self.txn_lock.lock().await;

        match self.accounts.get_mut(id) {
            Some(mut entry) => {
                entry.status = status;
                Ok(entry.clone())
            }
            None => Err(CoreError::NotFound),
        }
    }

    async fn delete_account(&self, id: &AccountId) -> Result<bool, CoreError> {
        // Runs under the scope lock: a commit re-inserting a record removed
        // mid-scope would resurrect it without its contact-index entries.
        let _scope = self.txn_lock.lock().await;

        match self.accounts.remove(id) {
            Some((_, account)) => {
                for channel in account.contact_channels() {
                    self.contacts.remove_if(channel, |_, owner| owner == id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn with_transaction<T, F>(&self, f: F) -> Result<T, CoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn StoreTransaction) -> Result<T, CoreError> + Send + 'static,
    {
        let _scope = self.txn_lock.lock().await;

        let mut txn = MemoryTransaction {
            accounts: &self.accounts,
            staged: HashMap::new(),
        };

        // Abort: staged writes are dropped with the transaction view.
        let value = f(&mut txn)?;

        // Commit: publish staged writes while still holding the scope lock.
        for (id, account) in txn.staged {
            self.accounts.insert(id, account);
        }

        Ok(value)
    }
}
