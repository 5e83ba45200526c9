//! Orchestrator error type.

use cb_01_balance_reader::ReadError;
use cb_02_operation_sequencer::IllegalTransition;
use cb_03_batch_tracker::BatchError;
use shared_crypto::ProofError;
use thiserror::Error;

/// Everything `execute` can fail with. Each variant wraps the component
/// error verbatim so callers can show the concrete reason; transparency
/// keeps the precondition texts (e.g. "insufficient actual balance")
/// intact.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    /// The intent is not legal from the current state. Recoverable by
    /// changing intent.
    #[error(transparent)]
    Illegal(#[from] IllegalTransition),

    /// Local proof generation failed. Retryable by the caller.
    #[error(transparent)]
    Proof(#[from] ProofError),

    /// Part of a multi-transaction plan did not complete. Not automatically
    /// retryable; requires a state re-read before any follow-up action.
    #[error(transparent)]
    Batch(#[from] BatchError),

    /// A state read failed. Safe to retry.
    #[error(transparent)]
    Read(#[from] ReadError),
}
