//! # Confidential-Balance Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # In-memory ledger + collaborator doubles
//! │
//! └── integration/      # Cross-crate flows
//!     ├── lifecycle_flow.rs   # Register → deposit → rollover → withdraw
//!     ├── concurrency.rs      # Per-key serialization, cross-key parallelism
//!     └── batch_failures.rs   # Aborts, swallowed events, partial batches
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cb-tests
//!
//! # By category
//! cargo test -p cb-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
