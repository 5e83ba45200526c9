//! # cb-01-balance-reader
//!
//! Balance State Reader for the confidential-balance core.
//!
//! ## Role in System
//!
//! - **Single Source of Truth Loader**: Queries the ledger for the raw state
//!   of one (account, token) pair and decrypts the plaintext amounts locally
//!   with the holder's key.
//! - **No Retries**: Transient failures propagate to the caller, which
//!   decides whether to retry the whole read. Reads have no side effects and
//!   are always safe to retry.
//! - **No Guessing**: An unregistered account gets an explicit
//!   `is_registered = false` snapshot with `Unknown` amounts, never a
//!   synthesized zero.

pub mod error;
pub mod ports;
pub mod reader;

pub use error::ReadError;
pub use ports::LedgerQueryGateway;
pub use reader::{BalanceReader, ReaderConfig};
