//! # cb-02-operation-sequencer
//!
//! Operation Sequencer for the confidential-balance core.
//!
//! ## Role in System
//!
//! - **Legality Gate**: Given the current `BalanceState` snapshot and a
//!   requested intent, decides whether the intent is currently legal.
//! - **Plan Builder**: For a legal intent, builds the ordered list of ledger
//!   calls (with required proof kinds) that satisfies it.
//! - **Pure**: Never mutates state and performs no IO; every decision is a
//!   function of the snapshot passed in. The caller re-validates through
//!   this sequencer even when the UI already checked, since state may have
//!   changed in between.

pub mod error;
pub mod intent;
pub mod plan;
pub mod sequencer;

pub use error::IllegalTransition;
pub use intent::OperationIntent;
pub use plan::{CallPlan, LedgerCall, ProofBundle, ProofRequirement, ProvenCall};
pub use sequencer::OperationSequencer;
