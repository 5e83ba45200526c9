//! # Balance Decryption Contract
//!
//! Decryption is purely local: the holder's solver recovers the plaintext
//! from a chunked ElGamal ciphertext by solving a bounded discrete log.
//! Keys are resolved by fingerprint from the implementation's own secure
//! store; the core never handles the secret.

use crate::errors::DecryptError;
use async_trait::async_trait;
use shared_types::{Ciphertext, KeyFingerprint};

/// Local decryption of confidential amounts.
///
/// Solving is CPU-bound (same solver tiers as range proving), so the
/// contract is async and implementations offload to a blocking pool.
#[async_trait]
pub trait BalanceDecryptor: Send + Sync {
    /// Decrypt a ciphertext with the key matching `key_fingerprint`.
    async fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        key_fingerprint: &KeyFingerprint,
    ) -> Result<u64, DecryptError>;
}
