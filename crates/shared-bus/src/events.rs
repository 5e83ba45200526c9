//! # Completion Events
//!
//! Defines the event type that flows through the completion bus.

use serde::{Deserialize, Serialize};
use shared_types::{TxHash, TxStatus};

/// Finality notification for one submitted transaction.
///
/// Emitted exactly once per transaction that reaches finality; waiters
/// correlate events to submissions by hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCompletion {
    /// Hash of the finalized transaction.
    pub hash: TxHash,
    /// Whether the transaction committed or aborted.
    pub status: TxStatus,
    /// Unix timestamp (seconds) when finality was reached.
    pub finalized_at: u64,
}

impl TxCompletion {
    /// Shorthand for a committed-transaction event.
    #[must_use]
    pub fn committed(hash: TxHash, finalized_at: u64) -> Self {
        Self {
            hash,
            status: TxStatus::Committed,
            finalized_at,
        }
    }

    /// Shorthand for an aborted-transaction event.
    #[must_use]
    pub fn aborted(hash: TxHash, reason: impl Into<String>, finalized_at: u64) -> Self {
        Self {
            hash,
            status: TxStatus::Aborted {
                reason: reason.into(),
            },
            finalized_at,
        }
    }
}
