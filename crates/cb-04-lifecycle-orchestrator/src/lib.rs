//! # cb-04-lifecycle-orchestrator
//!
//! Lifecycle Orchestrator for the confidential-balance core.
//!
//! ## Role in System
//!
//! - **Root Component**: Owns one `BalanceState` per (account, token, key)
//!   and exposes the public intents.
//! - **Per-Key Serialization**: Intents against the same balance never
//!   interleave; intents against different balances proceed fully in
//!   parallel.
//! - **Pipeline**: read → plan → prove → submit/await → re-read, strictly
//!   in that order, under the key's lock for the whole duration.
//! - **Truth Discipline**: The cached state is only ever updated from a
//!   successful read of the ledger; no step publishes an optimistic state.
//!
//! ## Data Flow
//!
//! ```text
//! intent ──→ [Orchestrator] ──→ [Sequencer] ──→ [ProofProvider]
//!                │ lock(key)        state check      sigma/range
//!                ▼                                        │
//!          [BalanceReader] ←── re-read ←── [BatchTracker] ┘
//! ```

pub mod error;
pub mod orchestrator;

pub use error::OrchestratorError;
pub use orchestrator::{LifecycleOrchestrator, OrchestratorConfig};
