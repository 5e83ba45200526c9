//! # cb-03-batch-tracker
//!
//! Batch Completion Tracker for the confidential-balance core.
//!
//! ## Role in System
//!
//! - **Atomic View**: A call plan with more than one ledger call must look
//!   all-or-nothing to the orchestrator, even though the ledger commits each
//!   transaction independently and reports finality on an out-of-band event
//!   stream keyed by transaction hash.
//! - **Subscribe Before Submit**: The completion subscription is opened
//!   before the first transaction goes out, so an event can never fire into
//!   the void between submission and subscription.
//! - **No Automatic Retry**: Retrying a partially-failed batch could
//!   duplicate a deposit or withdraw effect. The caller re-reads state and
//!   lets the user decide.

pub mod error;
pub mod ports;
pub mod tracker;

pub use error::{BatchError, FailedTx, FailureReason};
pub use ports::LedgerSubmitGateway;
pub use tracker::{BatchConfig, BatchTracker, TxBatch};
