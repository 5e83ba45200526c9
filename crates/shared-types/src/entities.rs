//! # Core Domain Entities
//!
//! Defines the entities of the confidential-balance domain.
//!
//! ## Clusters
//!
//! - **Identity**: `AccountAddress`, `TokenAddress`, `KeyFingerprint`,
//!   `EncryptionKey`, `BalanceKey`
//! - **Balance**: `Amount`, `Ciphertext`, `BalanceState`
//! - **Ledger**: `TxHash`, `TxStatus`, `TxReceipt`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte ledger account address.
pub type AccountAddress = [u8; 32];

/// A 32-byte fungible-token address.
pub type TokenAddress = [u8; 32];

/// A 32-byte fingerprint of a decryption key (hash of the matching
/// encryption key). The core correlates balances to keys exclusively through
/// fingerprints; secret key material stays inside the collaborators.
pub type KeyFingerprint = [u8; 32];

/// A 32-byte transaction hash.
pub type TxHash = [u8; 32];

/// A twisted-ElGamal encryption (public) key bound to a balance on ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct EncryptionKey(pub [u8; 32]);

impl EncryptionKey {
    /// Structural validity check. An all-zero key is never a valid curve
    /// point; full point validation is the proof provider's concern.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.iter().any(|b| *b != 0)
    }

    /// Hex rendering for logs and display.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

/// Identifies one tracked confidential balance.
///
/// Immutable once created; equality and hashing cover all three components,
/// so the same (account, token) pair under a rotated key is a distinct
/// balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BalanceKey {
    /// The owning ledger account.
    pub account: AccountAddress,
    /// The tracked token.
    pub token: TokenAddress,
    /// Fingerprint of the decryption key that can read this balance.
    pub key_fingerprint: KeyFingerprint,
}

// =============================================================================
// CLUSTER B: BALANCE
// =============================================================================

/// A decrypted balance amount.
///
/// `Unknown` until a successful decrypting read; unregistered balances are
/// always `Unknown` (never a synthesized zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Amount {
    /// No successful read has decrypted this sub-balance yet.
    #[default]
    Unknown,
    /// Plaintext value confirmed by a decrypting read.
    Known(u64),
}

impl Amount {
    /// Returns the plaintext value, or `None` if unknown.
    #[must_use]
    pub fn known(&self) -> Option<u64> {
        match self {
            Self::Known(v) => Some(*v),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(v) => write!(f, "{v}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// An opaque encrypted amount: a list of 64-byte twisted-ElGamal chunk
/// ciphertexts. Produced by the ledger, consumed by the holder's decryptor
/// and the proof provider; never interpreted by the core.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ciphertext {
    /// Chunk ciphertexts, least-significant chunk first.
    #[serde_as(as = "Vec<Bytes>")]
    pub chunks: Vec<[u8; 64]>,
}

impl Ciphertext {
    #[must_use]
    pub fn new(chunks: Vec<[u8; 64]>) -> Self {
        Self { chunks }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// The authoritative snapshot of one confidential balance.
///
/// Created the first time a `BalanceKey` is observed, and mutated only by
/// re-reads that follow a successfully completed call plan — never
/// speculatively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceState {
    /// Whether an encryption key is bound to this (account, token) on ledger.
    pub is_registered: bool,
    /// Whether withdraw/transfer is currently blocked by the ledger.
    pub is_frozen: bool,
    /// Whether the actual sub-balance is in single-ciphertext canonical form.
    pub is_normalized: bool,
    /// Decrypted pending (not yet rolled over) sub-balance.
    pub pending_amount: Amount,
    /// Decrypted spendable sub-balance.
    pub actual_amount: Amount,
    /// Encrypted pending sub-balance, input to subsequent proofs.
    pub pending_ciphertext: Option<Ciphertext>,
    /// Encrypted actual sub-balance, input to subsequent proofs.
    pub actual_ciphertext: Option<Ciphertext>,
    /// Unix timestamp (seconds) of the read that produced this snapshot.
    pub last_observed_at: u64,
}

impl BalanceState {
    /// Synthesize the snapshot for an unregistered (account, token) pair.
    ///
    /// Amounts stay `Unknown`: querying balances of an unregistered account
    /// is either an error or a meaningless zero, and the reader must not
    /// guess which.
    #[must_use]
    pub fn unregistered(observed_at: u64) -> Self {
        Self {
            is_registered: false,
            is_frozen: false,
            is_normalized: false,
            pending_amount: Amount::Unknown,
            actual_amount: Amount::Unknown,
            pending_ciphertext: None,
            actual_ciphertext: None,
            last_observed_at: observed_at,
        }
    }

    /// Whether spend-type operations (withdraw, transfer) pass the flag
    /// preconditions. Amount sufficiency is checked separately.
    #[must_use]
    pub fn is_spendable(&self) -> bool {
        self.is_registered && !self.is_frozen && self.is_normalized
    }
}

// =============================================================================
// CLUSTER C: LEDGER
// =============================================================================

/// Finality outcome of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    /// The transaction reached finality and applied its effects.
    Committed,
    /// The transaction reached finality but aborted.
    Aborted {
        /// Ledger-reported abort reason.
        reason: String,
    },
}

impl TxStatus {
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// Receipt for one transaction that reached finality successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Hash of the committed transaction.
    pub hash: TxHash,
    /// Unix timestamp (seconds) when finality was observed locally.
    pub observed_at: u64,
}
