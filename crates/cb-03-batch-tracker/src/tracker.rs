//! # Batch Tracker Service
//!
//! Submits a call plan as independently-signed transactions and resolves
//! only when a completion event has been observed for every one of them.

use crate::error::{BatchError, FailedTx, FailureReason};
use crate::ports::LedgerSubmitGateway;
use cb_02_operation_sequencer::ProvenCall;
use shared_bus::CompletionSubscriber;
use shared_types::{TxHash, TxReceipt, TxStatus};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

/// Tracker configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Default deadline for a whole batch to reach finality.
    pub completion_deadline: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            completion_deadline: Duration::from_secs(60),
        }
    }
}

/// The outstanding-hash set for one in-flight batch, correlated to the call
/// plan that produced it.
#[derive(Debug)]
pub struct TxBatch {
    /// Call name per outstanding hash, removed as events arrive.
    outstanding: HashMap<TxHash, &'static str>,
}

impl TxBatch {
    /// Track the given (hash, call-name) pairs.
    #[must_use]
    pub fn new(submitted: Vec<(TxHash, &'static str)>) -> Self {
        Self {
            outstanding: submitted.into_iter().collect(),
        }
    }

    /// Mark one hash resolved. Returns the call name if the hash belonged
    /// to this batch; events for unrelated hashes return `None` and leave
    /// the batch untouched.
    pub fn resolve(&mut self, hash: &TxHash) -> Option<&'static str> {
        self.outstanding.remove(hash)
    }

    /// Whether every submitted transaction has resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Hashes still awaiting an event.
    #[must_use]
    pub fn unresolved(&self) -> Vec<(TxHash, &'static str)> {
        self.outstanding.iter().map(|(h, c)| (*h, *c)).collect()
    }
}

/// Submits call plans and awaits their completion events.
pub struct BatchTracker {
    submitter: Arc<dyn LedgerSubmitGateway>,
    completions: Arc<dyn CompletionSubscriber>,
    config: BatchConfig,
}

impl BatchTracker {
    /// Create a tracker over the given collaborators.
    pub fn new(
        submitter: Arc<dyn LedgerSubmitGateway>,
        completions: Arc<dyn CompletionSubscriber>,
        config: BatchConfig,
    ) -> Self {
        Self {
            submitter,
            completions,
            config,
        }
    }

    /// Submit every call and resolve once all of them reached finality
    /// successfully, using the configured deadline.
    pub async fn submit_and_await(
        &self,
        calls: Vec<ProvenCall>,
    ) -> Result<Vec<TxReceipt>, BatchError> {
        self.submit_and_await_until(calls, self.config.completion_deadline)
            .await
    }

    /// Submit every call and resolve once all of them reached finality
    /// successfully, or fail with the partial outcome at `deadline`.
    pub async fn submit_and_await_until(
        &self,
        calls: Vec<ProvenCall>,
        deadline: Duration,
    ) -> Result<Vec<TxReceipt>, BatchError> {
        if calls.is_empty() {
            return Ok(Vec::new());
        }

        let batch_id = Uuid::new_v4();

        // Subscribe before the first submission: a transaction can finalize
        // before submit() of the next one returns, and the event must not
        // be lost.
        let mut subscription = self.completions.subscribe();

        let mut submitted: Vec<(TxHash, &'static str)> = Vec::with_capacity(calls.len());
        let mut failed: Vec<FailedTx> = Vec::new();

        for (index, call) in calls.iter().enumerate() {
            match self.submitter.submit(call).await {
                Ok(hash) => {
                    debug!(
                        batch = %batch_id,
                        call = call.call.name(),
                        hash = %hex_prefix(&hash),
                        "Transaction submitted"
                    );
                    submitted.push((hash, call.call.name()));
                }
                Err(err) => {
                    warn!(
                        batch = %batch_id,
                        call = call.call.name(),
                        error = %err,
                        "Submission failed, not submitting remaining calls"
                    );
                    if submitted.is_empty() {
                        return Err(BatchError::NothingSubmitted(err));
                    }
                    failed.push(FailedTx {
                        hash: None,
                        call: call.call.name(),
                        reason: FailureReason::SubmissionFailed(err),
                    });
                    for skipped in &calls[index + 1..] {
                        failed.push(FailedTx {
                            hash: None,
                            call: skipped.call.name(),
                            reason: FailureReason::NotSubmitted,
                        });
                    }
                    break;
                }
            }
        }

        let mut batch = TxBatch::new(submitted);
        let mut completed: Vec<TxReceipt> = Vec::new();
        let deadline_at = Instant::now() + deadline;

        while !batch.is_complete() {
            let remaining = deadline_at.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match tokio::time::timeout(remaining, subscription.recv()).await {
                Ok(Some(event)) => {
                    let Some(call) = batch.resolve(&event.hash) else {
                        // Not ours; another balance's transaction finalized.
                        continue;
                    };
                    match event.status {
                        TxStatus::Committed => {
                            debug!(
                                batch = %batch_id,
                                call,
                                hash = %hex_prefix(&event.hash),
                                "Transaction committed"
                            );
                            completed.push(TxReceipt {
                                hash: event.hash,
                                observed_at: event.finalized_at,
                            });
                        }
                        TxStatus::Aborted { reason } => {
                            warn!(
                                batch = %batch_id,
                                call,
                                hash = %hex_prefix(&event.hash),
                                reason = %reason,
                                "Transaction aborted"
                            );
                            failed.push(FailedTx {
                                hash: Some(event.hash),
                                call,
                                reason: FailureReason::Aborted(reason),
                            });
                        }
                    }
                }
                Ok(None) => {
                    warn!(batch = %batch_id, "Completion bus closed mid-batch");
                    break;
                }
                Err(_) => {
                    warn!(
                        batch = %batch_id,
                        outstanding = batch.unresolved().len(),
                        "Batch deadline elapsed"
                    );
                    break;
                }
            }
        }

        for (hash, call) in batch.unresolved() {
            failed.push(FailedTx {
                hash: Some(hash),
                call,
                reason: FailureReason::Unresolved,
            });
        }

        if failed.is_empty() {
            debug!(batch = %batch_id, transactions = completed.len(), "Batch complete");
            Ok(completed)
        } else {
            Err(BatchError::Partial {
                completed: completed.into_iter().map(|r| r.hash).collect(),
                failed,
            })
        }
    }
}

/// Short hex prefix of a hash for log lines.
fn hex_prefix(hash: &[u8; 32]) -> String {
    hash[..4].iter().map(|b| format!("{b:02x}")).collect()
}
