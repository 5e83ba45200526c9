//! # Error Types
//!
//! Defines the ledger-facing error type shared across crates. Component
//! errors (illegal transitions, proof failures, batch failures) live with
//! their components.

use thiserror::Error;

/// Errors surfaced by the ledger query and submission gateways.
///
/// All variants are transient from the core's point of view: reads are safe
/// to retry, submissions are not (the caller must re-read state first).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The ledger RPC endpoint could not be reached.
    #[error("Ledger unreachable: {0}")]
    Unreachable(String),

    /// A ledger call did not answer within the configured deadline.
    #[error("Ledger deadline exceeded after {deadline_ms}ms")]
    DeadlineExceeded { deadline_ms: u64 },

    /// The ledger refused the submission outright (malformed payload,
    /// sequence number conflict). Distinct from a post-submission abort,
    /// which arrives on the completion stream.
    #[error("Submission rejected: {reason}")]
    SubmissionRejected { reason: String },
}
