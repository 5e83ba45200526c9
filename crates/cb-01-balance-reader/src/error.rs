//! Reader error type.

use shared_crypto::DecryptError;
use shared_types::LedgerError;
use thiserror::Error;

/// Errors from a single state read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadError {
    /// A ledger query failed or timed out.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Local decryption of a fetched ciphertext failed.
    #[error("Decryption failed: {0}")]
    Decrypt(#[from] DecryptError),
}
