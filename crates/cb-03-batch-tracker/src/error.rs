//! Tracker error types.

use shared_types::{LedgerError, TxHash};
use thiserror::Error;

/// Why one transaction in a batch did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The submission call itself failed; the transaction never existed.
    SubmissionFailed(LedgerError),
    /// Submission was not attempted because an earlier call in the plan
    /// failed to submit.
    NotSubmitted,
    /// The ledger finalized the transaction as aborted.
    Aborted(String),
    /// No completion event arrived before the deadline. The ledger may
    /// still complete the transaction later; only a state re-read tells.
    Unresolved,
}

/// One transaction that did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTx {
    /// Hash, when submission got far enough to produce one.
    pub hash: Option<TxHash>,
    /// Name of the planned call this transaction carried.
    pub call: &'static str,
    /// What went wrong.
    pub reason: FailureReason,
}

/// Batch outcome errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BatchError {
    /// Submission failed before any transaction was sent. Nothing happened
    /// on ledger; the caller may retry the whole plan.
    #[error("Batch submission failed before any transaction was sent: {0}")]
    NothingSubmitted(LedgerError),

    /// Some transactions completed and some did not. The caller must not
    /// assume rollback: the ledger's own state is the source of truth and
    /// must be re-read before any follow-up action.
    #[error("Partial batch failure: {} completed, {} failed", .completed.len(), .failed.len())]
    Partial {
        /// Hashes that reached finality successfully.
        completed: Vec<TxHash>,
        /// Transactions that aborted, never resolved, or were never sent.
        failed: Vec<FailedTx>,
    },
}
