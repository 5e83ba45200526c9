//! # Key Fingerprinting
//!
//! A balance is correlated to its decryption key through a fingerprint of
//! the matching *encryption* key, so the core never needs to see secret
//! material.

use sha3::{Digest, Sha3_256};
use shared_types::{EncryptionKey, KeyFingerprint};

/// Compute the fingerprint of an encryption key (SHA3-256 over the key
/// bytes). The holder derives the same fingerprint from the decryption key's
/// public half, which is how reads and proofs find their key.
#[must_use]
pub fn fingerprint_encryption_key(key: &EncryptionKey) -> KeyFingerprint {
    let mut hasher = Sha3_256::new();
    hasher.update(key.0);
    hasher.finalize().into()
}
