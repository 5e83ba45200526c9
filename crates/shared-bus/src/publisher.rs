//! # Event Publisher
//!
//! Defines the publishing side of the completion bus.

use crate::events::TxCompletion;
use crate::subscriber::{CompletionSubscriber, Subscription};
use crate::DEFAULT_CHANNEL_CAPACITY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::debug;

/// Trait for publishing completion events to the bus.
///
/// Implemented by the ledger-client adapter, which translates the wire-level
/// finality notifications into [`TxCompletion`] events.
#[async_trait]
pub trait CompletionPublisher: Send + Sync {
    /// Publish an event to the bus.
    ///
    /// # Returns
    ///
    /// The number of active subscribers that received the event.
    async fn publish(&self, event: TxCompletion) -> usize;

    /// Get the total number of events published.
    fn events_published(&self) -> u64;
}

/// In-memory implementation of the completion bus.
///
/// Uses `tokio::sync::broadcast` for multi-producer, multi-consumer
/// semantics. Suitable for a single wallet process; a remote ledger client
/// would put its websocket/long-poll adapter behind the same traits.
pub struct InMemoryCompletionBus {
    /// Broadcast sender for events.
    sender: broadcast::Sender<TxCompletion>,

    /// Total events published.
    events_published: AtomicU64,

    /// Channel capacity.
    capacity: usize,
}

impl InMemoryCompletionBus {
    /// Create a new in-memory bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a new in-memory bus with specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Get the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Get the channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryCompletionBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionPublisher for InMemoryCompletionBus {
    async fn publish(&self, event: TxCompletion) -> usize {
        self.events_published.fetch_add(1, Ordering::Relaxed);

        debug!(
            hash = %hex_prefix(&event.hash),
            committed = event.status.is_committed(),
            "Publishing completion event"
        );

        // send() errs only when there are no receivers; the event is still
        // counted, matching the ledger's fire-and-forget semantics.
        self.sender.send(event).unwrap_or(0)
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

impl CompletionSubscriber for InMemoryCompletionBus {
    fn subscribe(&self) -> Subscription {
        debug!(subscribers = self.sender.receiver_count() + 1, "New completion subscription");
        Subscription::new(self.sender.subscribe())
    }
}

/// Short hex prefix of a hash for log lines.
fn hex_prefix(hash: &[u8; 32]) -> String {
    hash[..4].iter().map(|b| format!("{b:02x}")).collect()
}
