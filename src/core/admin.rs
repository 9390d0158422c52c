//! Account administration: status updates, deletion, and lookups
//!
//! Thin CRUD over the store seam. Nothing here touches balances or
//! credentials; status is the only field administration mutates.

use crate::core::traits::TransactionalStore;
use crate::types::{Account, AccountId, AccountStatus, CoreError};
use std::sync::Arc;
use tracing::info;

/// Administrative operations over accounts
pub struct AccountAdmin<S> {
    store: Arc<S>,
}

impl<S> AccountAdmin<S>
where
    S: TransactionalStore,
{
    /// Create an admin service over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Set the status of the account matching `id`
    ///
    /// Fails with `NotFound` if no account matches.
    pub async fn update_status(
        &self,
        id: &AccountId,
        status: AccountStatus,
    ) -> Result<Account, CoreError> {
        let account = self.store.update_status(id, status).await?;
        info!(account_id = %id, ?status, "account status updated");
        Ok(account)
    }

    /// Remove the account matching `id`
    ///
    /// Deleting an id that matches nothing is a no-op returning `false`,
    /// not an error. Callers that care can surface the flag themselves.
    pub async fn delete(&self, id: &AccountId) -> Result<bool, CoreError> {
        let deleted = self.store.delete_account(id).await?;
        if deleted {
            info!(account_id = %id, "account deleted");
        }
        Ok(deleted)
    }

    /// All accounts, in no particular order
    pub async fn list(&self) -> Result<Vec<Account>, CoreError> {
        self.store.list_accounts().await
    }

    /// Look up an account by contact channel
    ///
    /// Fails with `NotFound` when no account matches; unlike login this is
    /// an administrative read, so there is nothing to hide.
    pub async fn get_by_contact(&self, identifier: &str) -> Result<Account, CoreError> {
        self.store
            .find_by_contact(identifier)
            .await?
            .ok_or(CoreError::NotFound)
    }
}
