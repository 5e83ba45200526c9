//! # Call Plans
//!
//! A `CallPlan` is the ordered sequence of ledger calls produced for one
//! intent. A plan is all-or-nothing from the caller's perspective even when
//! it contains more than one call; the batch tracker enforces that view.

use serde::{Deserialize, Serialize};
use shared_crypto::{Commitment, RangeProof, SigmaProof, SigmaProofRequest};
use shared_types::{AccountAddress, Ciphertext, EncryptionKey, KeyFingerprint, TokenAddress};

/// Which proof artifacts a ledger call must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofRequirement {
    /// No local proof; the ledger validates on its own.
    None,
    /// Sigma proof only.
    Sigma,
    /// Sigma proof plus range proof.
    SigmaAndRange,
}

/// One ledger mutation, with everything the submission layer and the proof
/// provider need. Ciphertexts are carried opaquely from the snapshot the
/// plan was built against; the core never combines or interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerCall {
    /// Bind an encryption key to (account, token).
    BindEncryptionKey {
        account: AccountAddress,
        token: TokenAddress,
        encryption_key: EncryptionKey,
    },

    /// Deposit a cleartext amount into the pending sub-balance.
    Deposit {
        account: AccountAddress,
        token: TokenAddress,
        amount: u64,
    },

    /// Withdraw to cleartext from the actual sub-balance.
    Withdraw {
        account: AccountAddress,
        token: TokenAddress,
        /// Amount leaving the balance.
        amount: u64,
        /// Decrypted actual balance the sigma proof claims.
        actual_balance: u64,
        /// The ciphertext the claim covers.
        actual_ciphertext: Ciphertext,
    },

    /// Confidential transfer from the actual sub-balance.
    Transfer {
        account: AccountAddress,
        token: TokenAddress,
        /// Plaintext amount being transferred.
        amount: u64,
        /// Sender balance remaining after the transfer; the proofs cover
        /// this resulting balance.
        remaining_balance: u64,
        /// Sender's current actual ciphertext.
        actual_ciphertext: Ciphertext,
        recipient: AccountAddress,
        recipient_key: EncryptionKey,
        /// The amount is additionally encrypted under each auditor key.
        auditor_keys: Vec<EncryptionKey>,
    },

    /// Reduce unnormalized ciphertexts to canonical form.
    Normalize {
        account: AccountAddress,
        token: TokenAddress,
        /// Plaintext the sigma proof claims the ciphertexts open to.
        claimed_amount: u64,
        /// The ciphertexts being normalized; more than one means the ledger
        /// folds their homomorphic sum (the rollover-then-normalize path).
        unnormalized: Vec<Ciphertext>,
    },

    /// Move the pending sub-balance into actual.
    Rollover {
        account: AccountAddress,
        token: TokenAddress,
    },

    /// Rotate the bound encryption key, optionally unfreezing.
    RotateEncryptionKey {
        account: AccountAddress,
        token: TokenAddress,
        new_key: EncryptionKey,
        unfreeze: bool,
    },
}

impl LedgerCall {
    /// Stable call name for logs and the submission layer.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BindEncryptionKey { .. } => "bind_encryption_key",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Transfer { .. } => "transfer_confidential",
            Self::Normalize { .. } => "normalize_balance",
            Self::Rollover { .. } => "rollover_balance",
            Self::RotateEncryptionKey { .. } => "rotate_encryption_key",
        }
    }

    /// Which proofs this call must carry.
    #[must_use]
    pub fn proof_requirement(&self) -> ProofRequirement {
        match self {
            Self::BindEncryptionKey { .. }
            | Self::Deposit { .. }
            | Self::Rollover { .. }
            | Self::RotateEncryptionKey { .. } => ProofRequirement::None,
            Self::Normalize { .. } => ProofRequirement::Sigma,
            Self::Withdraw { .. } | Self::Transfer { .. } => ProofRequirement::SigmaAndRange,
        }
    }

    /// Build the sigma proof request for this call, if it needs one.
    #[must_use]
    pub fn sigma_request(&self, key_fingerprint: KeyFingerprint) -> Option<SigmaProofRequest> {
        match self {
            Self::Withdraw {
                actual_balance,
                actual_ciphertext,
                ..
            } => Some(SigmaProofRequest {
                claimed_amount: *actual_balance,
                ciphertexts: vec![actual_ciphertext.clone()],
                key_fingerprint,
            }),
            Self::Transfer {
                remaining_balance,
                actual_ciphertext,
                ..
            } => Some(SigmaProofRequest {
                claimed_amount: *remaining_balance,
                ciphertexts: vec![actual_ciphertext.clone()],
                key_fingerprint,
            }),
            Self::Normalize {
                claimed_amount,
                unnormalized,
                ..
            } => Some(SigmaProofRequest {
                claimed_amount: *claimed_amount,
                ciphertexts: unnormalized.clone(),
                key_fingerprint,
            }),
            _ => None,
        }
    }

    /// The amount the range proof must bound, if this call needs one. For
    /// spend-type calls that is the balance remaining after the spend.
    #[must_use]
    pub fn range_amount(&self) -> Option<u64> {
        match self {
            Self::Withdraw {
                amount,
                actual_balance,
                ..
            } => Some(actual_balance.saturating_sub(*amount)),
            Self::Transfer {
                remaining_balance, ..
            } => Some(*remaining_balance),
            _ => None,
        }
    }
}

/// The ordered call sequence for one intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPlan {
    /// Calls in submission order.
    pub calls: Vec<LedgerCall>,
}

impl CallPlan {
    /// Plan with a single call.
    #[must_use]
    pub fn single(call: LedgerCall) -> Self {
        Self { calls: vec![call] }
    }

    /// Number of ledger transactions this plan will produce.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Whether completing this plan takes more than one transaction.
    #[must_use]
    pub fn is_multi_transaction(&self) -> bool {
        self.calls.len() > 1
    }
}

/// Proof artifacts generated for one call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofBundle {
    /// Sigma proof, when the call requires one.
    pub sigma: Option<SigmaProof>,
    /// Range proof and its commitment, when the call requires them.
    pub range: Option<(RangeProof, Commitment)>,
}

impl ProofBundle {
    /// Bundle for calls with no proof requirement.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A call with its proofs attached, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenCall {
    /// The planned call.
    pub call: LedgerCall,
    /// Artifacts satisfying `call.proof_requirement()`.
    pub proofs: ProofBundle,
}
