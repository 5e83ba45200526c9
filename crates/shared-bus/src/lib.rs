//! # Shared Bus - Transaction Completion Event Stream
//!
//! The ledger commits submitted transactions asynchronously and reports
//! finality through an out-of-band event stream, exactly one event per
//! submitted transaction (success and failure distinguished).
//!
//! ```text
//! ┌──────────────┐                     ┌───────────────────┐
//! │ Ledger client│                     │ Batch tracker     │
//! │ (adapter)    │    publish()        │                   │
//! │              │ ──────┐             │                   │
//! └──────────────┘       │             └───────────────────┘
//!                        ▼                      ↑
//!                  ┌──────────────┐             │
//!                  │ Completion   │             │
//!                  │ bus          │ ────────────┘
//!                  └──────────────┘  subscribe() BEFORE submit
//! ```
//!
//! Subscribers must be registered before the transactions they wait for are
//! submitted; otherwise an event can fire into a bus with no receiver and
//! the waiter hangs until its deadline.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::TxCompletion;
pub use publisher::{CompletionPublisher, InMemoryCompletionBus};
pub use subscriber::{CompletionSubscriber, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before older events are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
