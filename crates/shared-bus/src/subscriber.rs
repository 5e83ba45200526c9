//! # Event Subscriber
//!
//! Defines the subscription side of the completion bus.

use crate::events::TxCompletion;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::warn;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// The completion bus was closed.
    #[error("Completion bus closed")]
    Closed,
}

/// Trait for subscribing to completion events.
///
/// The batch tracker subscribes through this seam before submitting, so the
/// subscribe-before-submit ordering is testable without a real ledger.
pub trait CompletionSubscriber: Send + Sync {
    /// Open a new subscription receiving every subsequent event.
    fn subscribe(&self) -> Subscription;
}

/// A subscription handle for receiving completion events.
///
/// Dropping the handle detaches it from the bus.
pub struct Subscription {
    /// The broadcast receiver.
    receiver: broadcast::Receiver<TxCompletion>,
}

impl Subscription {
    /// Create a new subscription.
    pub(crate) fn new(receiver: broadcast::Receiver<TxCompletion>) -> Self {
        Self { receiver }
    }

    /// Receive the next completion event.
    ///
    /// # Returns
    ///
    /// - `Some(event)` - The next event
    /// - `None` - The channel was closed (bus dropped)
    pub async fn recv(&mut self) -> Option<TxCompletion> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Closed) => return None,
                Err(broadcast::error::RecvError::Lagged(count)) => {
                    // A lagged waiter may have lost the event it needed; it
                    // will surface as a deadline timeout at the tracker.
                    warn!(lagged = count, "Completion subscriber lagged, events dropped");
                    continue;
                }
            }
        }
    }

    /// Try to receive the next event without blocking.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(event))` - An event was available
    /// - `Ok(None)` - No event available (would block)
    /// - `Err(SubscriptionError::Closed)` - The channel was closed
    pub fn try_recv(&mut self) -> Result<Option<TxCompletion>, SubscriptionError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Ok(Some(event)),
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => {
                    return Err(SubscriptionError::Closed)
                }
                Err(broadcast::error::TryRecvError::Lagged(count)) => {
                    warn!(lagged = count, "Completion subscriber lagged, events dropped");
                    continue;
                }
            }
        }
    }
}
