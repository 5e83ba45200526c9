//! # Integration Tests
//!
//! Cross-crate flows driven through the public orchestrator surface against
//! the in-memory ledger harness.

pub mod concurrency;
pub mod lifecycle_flow;
