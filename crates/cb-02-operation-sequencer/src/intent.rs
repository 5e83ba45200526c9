//! # Operation Intents
//!
//! The public intents a holder can request against one tracked balance.

use serde::{Deserialize, Serialize};
use shared_types::{AccountAddress, EncryptionKey};

/// One requested operation, carrying the parameters that intent needs.
///
/// Intents are declarative: the sequencer turns them into ledger call plans,
/// so an intent never references ciphertexts — those come from the current
/// snapshot at planning time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationIntent {
    /// Bind an encryption key to this (account, token) on ledger.
    Register {
        /// The key incoming amounts will be encrypted under.
        encryption_key: EncryptionKey,
    },

    /// Move cleartext funds into the pending sub-balance. The ledger itself
    /// encrypts on deposit; no local proof is needed.
    Deposit {
        /// Cleartext amount to deposit.
        amount: u64,
    },

    /// Withdraw from the actual sub-balance back to cleartext.
    Withdraw {
        /// Cleartext amount to withdraw.
        amount: u64,
    },

    /// Confidential transfer from the actual sub-balance.
    Transfer {
        /// Plaintext amount to transfer.
        amount: u64,
        /// Recipient account.
        recipient: AccountAddress,
        /// Recipient's encryption key.
        recipient_key: EncryptionKey,
        /// Auditor keys the amount is additionally encrypted under.
        auditor_keys: Vec<EncryptionKey>,
    },

    /// Reduce the actual sub-balance to canonical single-ciphertext form.
    Normalize,

    /// Move pending into actual, then normalize. Modeled as one intent
    /// because the two are always performed together; each step is still its
    /// own ledger transaction.
    Rollover,

    /// Unfreeze via the ledger's key-rotation primitive.
    Unfreeze {
        /// Replacement encryption key, generated by the external key store.
        new_encryption_key: EncryptionKey,
    },
}

impl OperationIntent {
    /// Stable intent name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Register { .. } => "register",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer",
            Self::Normalize => "normalize",
            Self::Rollover => "rollover",
            Self::Unfreeze { .. } => "unfreeze",
        }
    }
}
