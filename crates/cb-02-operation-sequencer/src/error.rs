//! Sequencer error type.

use thiserror::Error;

/// A requested intent is not legal from the current `BalanceState`.
///
/// Recoverable by the user changing intent (e.g. normalize first); the
/// message names the unmet precondition so the caller can show the concrete
/// reason rather than a generic failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IllegalTransition {
    /// Every mutating intent except `Register` requires a registered balance.
    #[error("not registered")]
    NotRegistered,

    /// `Register` on an already-registered balance.
    #[error("already registered")]
    AlreadyRegistered,

    /// Withdraw/transfer while the ledger has the balance frozen.
    #[error("frozen")]
    Frozen,

    /// `Unfreeze` on a balance that is not frozen.
    #[error("not frozen")]
    NotFrozen,

    /// Withdraw/transfer before the actual sub-balance is normalized.
    #[error("not normalized")]
    NotNormalized,

    /// Spend amount exceeds the spendable balance.
    #[error("insufficient actual balance: requested {requested}, available {available}")]
    InsufficientActualBalance {
        /// Amount the intent asked for.
        requested: u64,
        /// Decrypted actual balance.
        available: u64,
    },

    /// The actual sub-balance has not been decrypted yet.
    #[error("actual balance unknown")]
    ActualBalanceUnknown,

    /// The pending sub-balance has not been decrypted yet.
    #[error("pending balance unknown")]
    PendingBalanceUnknown,

    /// The encryption key supplied with the intent fails the structural check.
    #[error("invalid encryption key")]
    InvalidEncryptionKey,

    /// The transfer recipient's encryption key fails the structural check.
    #[error("invalid recipient encryption key")]
    InvalidRecipientKey,

    /// Pending + actual would overflow the amount domain.
    #[error("balance overflow")]
    BalanceOverflow,
}

impl IllegalTransition {
    /// The unmet-precondition text, as shown to users.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
