//! Transfer engine: atomic peer-to-peer balance movement
//!
//! This module provides the `TransferEngine`, which validates a transfer
//! request and executes the debit and credit as a single transactional
//! scope against the store.
//!
//! The engine enforces the transfer contract:
//! - Preconditions are checked in a fixed order, short-circuiting on the
//!   first failure (amount, sender, receiver, credential, balance,
//!   distinctness)
//! - The sender balance is re-checked inside the transactional scope, so a
//!   concurrent transfer can never double-spend against a stale read
//! - Either both balances change or neither does; any error inside the
//!   scope aborts it with no partial state
//!
//! The engine performs no in-memory locking and never retries; serialization
//! comes entirely from the store's transactional scope, and retries are the
//! caller's responsibility.

use crate::core::traits::{CredentialHasher, TransactionalStore};
use crate::types::{Account, CoreError, TransferReceipt};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

/// Validates and executes balance transfers between two accounts
///
/// Stateless; holds the process-wide store and hasher injected at
/// construction and is safe to share across concurrent requests.
pub struct TransferEngine<S, H> {
    store: Arc<S>,
    hasher: Arc<H>,
}

impl<S, H> TransferEngine<S, H>
where
    S: TransactionalStore,
    H: CredentialHasher,
{
    /// Create a transfer engine over the given store and hasher
    pub fn new(store: Arc<S>, hasher: Arc<H>) -> Self {
        Self { store, hasher }
    }

    /// Transfer `amount` taka from the sender to the receiver
    ///
    /// Sender and receiver are addressed by contact channel. The sender's
    /// PIN must verify against the stored credential hash before any
    /// balance is touched.
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins:
    /// - `Validation` - amount is not strictly positive
    /// - `SenderNotFound` / `ReceiverNotFound` - identifier matches no account
    /// - `InvalidCredentials` - PIN does not verify
    /// - `InsufficientBalance` - sender balance below `amount`
    /// - `InvalidTransfer` - sender and receiver are the same account
    /// - `TransferFailed` / `StoreUnavailable` - the transactional scope
    ///   aborted; neither balance changed
    pub async fn transfer(
        &self,
        sender_identifier: &str,
        receiver_identifier: &str,
        amount: Decimal,
        sender_pin: &str,
    ) -> Result<TransferReceipt, CoreError> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::validation("amount must be positive"));
        }

        let sender = self
            .store
            .find_by_contact(sender_identifier)
            .await?
            .ok_or_else(|| CoreError::sender_not_found(sender_identifier))?;

        let receiver = self
            .store
            .find_by_contact(receiver_identifier)
            .await?
            .ok_or_else(|| CoreError::receiver_not_found(receiver_identifier))?;

        if !self.hasher.verify(sender_pin, &sender.credential_hash)? {
            debug!(sender_id = %sender.id, "transfer attempt with wrong credential");
            return Err(CoreError::InvalidCredentials);
        }

        if sender.balance < amount {
            return Err(CoreError::insufficient_balance(sender.balance, amount));
        }

        if sender.id == receiver.id {
            return Err(CoreError::invalid_transfer(
                "sender and receiver are the same account",
            ));
        }

        let sender_id = sender.id;
        let receiver_id = receiver.id;

        let receipt = self
            .store
            .with_transaction(move |txn| {
                let mut sender: Account = txn
                    .get(&sender_id)?
                    .ok_or_else(|| CoreError::transfer_failed("sender account disappeared"))?;
                let mut receiver: Account = txn
                    .get(&receiver_id)?
                    .ok_or_else(|| CoreError::transfer_failed("receiver account disappeared"))?;

                // Re-check against the serialized view; the precondition
                // check above may have read a balance that a concurrent
                // transfer has since spent.
                if sender.balance < amount {
                    return Err(CoreError::insufficient_balance(sender.balance, amount));
                }

                sender.balance = sender
                    .balance
                    .checked_sub(amount)
                    .ok_or_else(|| CoreError::transfer_failed("debit underflow"))?;
                receiver.balance = receiver
                    .balance
                    .checked_add(amount)
                    .ok_or_else(|| CoreError::transfer_failed("credit overflow"))?;

                let receipt = TransferReceipt {
                    sender_id,
                    receiver_id,
                    amount,
                    sender_balance: sender.balance,
                };

                txn.put(sender)?;
                txn.put(receiver)?;
                Ok(receipt)
            })
            .await?;

        info!(
            sender_id = %receipt.sender_id,
            receiver_id = %receipt.receiver_id,
            amount = %receipt.amount,
            "transfer committed"
        );
        Ok(receipt)
    }
}
