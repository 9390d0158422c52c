//! Authentication service: registration and login
//!
//! Registration hashes the plaintext PIN before anything is persisted, so
//! the plaintext never reaches the store. Login deliberately reports the
//! same error for "no such account" and "wrong PIN" to keep the response
//! useless for identifier enumeration.

use crate::core::traits::{CredentialHasher, TransactionalStore};
use crate::types::{Account, AccountStatus, CoreError, RegisterRequest};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Registration and login over the store and hasher seams
///
/// Holds the process-wide store and hasher injected at construction; the
/// service itself is stateless and safe to share across requests.
pub struct AuthService<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> AuthService<S, H>
where
    S: TransactionalStore,
    H: CredentialHasher,
{
    /// Create an authentication service over the given store and hasher
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }

    /// Register a new account
    ///
    /// Validates the request, hashes the PIN, and persists the record with
    /// the hash in place of the plaintext. The store enforces channel
    /// uniqueness, so two concurrent registrations of the same channel
    /// cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The PIN is empty or no contact channel is given (`Validation`)
    /// - The opening balance is negative (`Validation`)
    /// - A contact channel is already registered (`Conflict`)
    pub async fn register(&self, request: RegisterRequest) -> Result<Account, CoreError> {
        if request.pin.is_empty() {
            return Err(CoreError::validation("pin must not be empty"));
        }
        if request.email.is_none() && request.phone.is_none() {
            return Err(CoreError::validation(
                "at least one contact channel (email or phone) is required",
            ));
        }

        let balance = request.initial_balance.unwrap_or(Decimal::ZERO);
        if balance < Decimal::ZERO {
            return Err(CoreError::validation("initial balance must not be negative"));
        }

        let credential_hash = self.hasher.hash(&request.pin)?;

        let account = Account {
            // Placeholder; the store assigns the real id at insert.
            id: Uuid::nil(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            credential_hash,
            balance,
            status: AccountStatus::Pending,
            role: request.role,
        };

        let account = self.store.insert_account(account).await?;
        info!(account_id = %account.id, "registered new account");
        Ok(account)
    }

    /// Authenticate a login attempt
    ///
    /// Looks up the account whose contact channel set contains
    /// `identifier` and verifies the PIN against the stored hash.
    /// Read-only; no state is mutated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` both when no account matches and when
    /// the PIN does not verify.
    pub async fn login(&self, identifier: &str, pin: &str) -> Result<Account, CoreError> {
        let account = match self.store.find_by_contact(identifier).await? {
            Some(account) => account,
            None => {
                debug!("login attempt for unknown identifier");
                return Err(CoreError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(pin, &account.credential_hash)? {
            debug!(account_id = %account.id, "login attempt with wrong credential");
            return Err(CoreError::InvalidCredentials);
        }

        Ok(account)
    }
}
