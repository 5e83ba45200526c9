//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the
//! confidential-balance subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Opaque Ciphertexts**: Encrypted balances are carried as opaque chunk
//!   lists; nothing outside the holder's decryptor interprets them.
//! - **No Secret Material**: Only public keys and key *fingerprints* appear
//!   in these types; secret keys never enter the core.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
