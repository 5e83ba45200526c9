//! # Proof Artifacts and the Proof Provider Contract
//!
//! Spend-type ledger calls require zero-knowledge artifacts: a sigma proof
//! that a claimed plaintext matches a ciphertext, and a range proof that a
//! committed amount lies within a bit-width bound. Generation is owned by an
//! opaque native library behind [`ProofProvider`]; the artifacts are opaque
//! byte strings to everything else.

use crate::errors::ProofError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{Ciphertext, KeyFingerprint};

/// An opaque sigma proof (plaintext/ciphertext correspondence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigmaProof(pub Vec<u8>);

/// An opaque range proof (committed value within a bit-width bound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProof(pub Vec<u8>);

/// The commitment a range proof opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(pub Vec<u8>);

/// Inputs for a sigma proof: the claimed plaintext, the ciphertexts it is
/// claimed to open, and the fingerprint of the key that can open them. The
/// provider resolves the secret key from its own store; when more than one
/// ciphertext is given the provider folds their homomorphic sum before
/// proving (the rollover-then-normalize path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigmaProofRequest {
    /// The plaintext amount being claimed.
    pub claimed_amount: u64,
    /// Ciphertexts the claim covers.
    pub ciphertexts: Vec<Ciphertext>,
    /// Fingerprint of the decryption key that opens them.
    pub key_fingerprint: KeyFingerprint,
}

/// Zero-knowledge proof generation.
///
/// Generation is CPU-bound and can take hundreds of milliseconds to seconds
/// depending on bit-width; implementations offload to a blocking pool and
/// callers treat every method as long-running. Failures are surfaced, never
/// retried inside the provider.
#[async_trait]
pub trait ProofProvider: Send + Sync {
    /// Produce a sigma proof for the request.
    async fn prove_sigma(&self, request: SigmaProofRequest) -> Result<SigmaProof, ProofError>;

    /// Produce a range proof and its commitment for `amount` within `bits`.
    async fn prove_range(&self, amount: u64, bits: u8)
        -> Result<(RangeProof, Commitment), ProofError>;
}
