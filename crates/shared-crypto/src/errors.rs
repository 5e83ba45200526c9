//! Crypto error types.

use thiserror::Error;

/// Proof generation errors.
///
/// Proof failures are reported to the caller verbatim, never retried
/// silently: generation is deterministic enough that an immediate retry
/// would fail the same way, and the caller decides whether to re-attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProofError {
    /// Sigma proof generation failed.
    #[error("Sigma proof generation failed: {0}")]
    SigmaFailed(String),

    /// Range proof generation failed.
    #[error("Range proof generation failed: {0}")]
    RangeFailed(String),

    /// The requested bit-width has no precomputed solver tier.
    #[error("Unsupported range bit-width: {bits} (supported: 16, 32, 48)")]
    UnsupportedBits {
        /// The requested bit-width.
        bits: u8,
    },

    /// The amount does not fit the requested bit-width.
    #[error("Amount {amount} exceeds {bits}-bit range bound")]
    AmountOutOfRange {
        /// The amount the proof was requested for.
        amount: u64,
        /// The requested bit-width.
        bits: u8,
    },
}

/// Local decryption errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecryptError {
    /// No decryption key with this fingerprint is available locally.
    #[error("No decryption key for fingerprint {fingerprint_hex}")]
    UnknownKey {
        /// Hex rendering of the missing fingerprint.
        fingerprint_hex: String,
    },

    /// The discrete-log solver exhausted its attempt budget.
    #[error("Discrete-log solver exhausted after {attempts} attempts")]
    SolverExhausted {
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// The ciphertext is structurally invalid (wrong chunk count or shape).
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}
