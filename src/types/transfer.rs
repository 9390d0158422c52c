//! Transfer-related types for the Taka core
//!
//! A transfer moves balance atomically from one account to another. The
//! request carries the sender's PIN, which the transfer engine verifies
//! against the stored credential hash before any balance is touched.

use super::account::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A peer-to-peer transfer request
///
/// Sender and receiver are addressed by contact channel (email or phone),
/// the same identifiers used for login.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    /// Contact channel of the sending account
    pub sender: String,

    /// Contact channel of the receiving account
    pub receiver: String,

    /// Amount of taka to move; must be strictly positive
    pub amount: Decimal,

    /// Sender's plaintext PIN, verified before execution
    pub pin: String,
}

/// Confirmation returned after a committed transfer
///
/// Reflects the state at commit time; the sender balance shown here is the
/// balance after the debit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferReceipt {
    /// Id of the debited account
    pub sender_id: AccountId,

    /// Id of the credited account
    pub receiver_id: AccountId,

    /// Amount moved
    pub amount: Decimal,

    /// Sender balance after the debit committed
    pub sender_balance: Decimal,
}
