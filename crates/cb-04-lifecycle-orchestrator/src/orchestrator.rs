//! # Lifecycle Orchestrator Service

use crate::error::OrchestratorError;
use cb_01_balance_reader::BalanceReader;
use cb_02_operation_sequencer::{
    CallPlan, OperationIntent, OperationSequencer, ProofBundle, ProvenCall,
};
use cb_03_batch_tracker::BatchTracker;
use parking_lot::{Mutex, RwLock};
use shared_crypto::ProofProvider;
use shared_types::{BalanceKey, BalanceState};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrator configuration.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Bit-width requested for range proofs on spend-type calls. Must match
    /// one of the proof provider's precomputed tiers.
    pub range_proof_bits: u8,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            range_proof_bits: 32,
        }
    }
}

/// Owns per-balance state and drives intents through the
/// read → plan → prove → submit → re-read pipeline.
pub struct LifecycleOrchestrator {
    reader: BalanceReader,
    sequencer: OperationSequencer,
    tracker: BatchTracker,
    proofs: Arc<dyn ProofProvider>,
    config: OrchestratorConfig,

    /// Authoritative snapshots, updated only from successful reads.
    states: RwLock<HashMap<BalanceKey, BalanceState>>,

    /// One async mutex per balance; held for the full execute pipeline.
    locks: Mutex<HashMap<BalanceKey, Arc<tokio::sync::Mutex<()>>>>,
}

impl LifecycleOrchestrator {
    /// Wire the orchestrator from its collaborators. All external surfaces
    /// (ledger, proofs, decryption) arrive constructor-injected so tests
    /// can substitute doubles.
    pub fn new(
        reader: BalanceReader,
        tracker: BatchTracker,
        proofs: Arc<dyn ProofProvider>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            reader,
            sequencer: OperationSequencer::new(),
            tracker,
            proofs,
            config,
            states: RwLock::new(HashMap::new()),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Execute one intent against one balance.
    ///
    /// Serialized per key: a second intent for the same key waits until
    /// this one's re-read has been published. The lock is released on every
    /// exit path; on failure the cached state stays exactly as last
    /// observed by a successful read.
    pub async fn execute(
        &self,
        key: &BalanceKey,
        intent: OperationIntent,
    ) -> Result<BalanceState, OrchestratorError> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;

        info!(intent = intent.name(), "Executing intent");

        let state = self.reader.read(key).await?;
        let plan = self.sequencer.plan(key, &state, intent)?;
        let proven = self.prove_plan(key, plan).await?;

        if let Err(err) = self.tracker.submit_and_await(proven).await {
            // The ledger may have completed some of the batch; refresh the
            // snapshot best-effort so the cache never trails a committed
            // effect, then surface the failure untouched.
            warn!(error = %err, "Batch did not complete, re-reading state");
            match self.reader.read(key).await {
                Ok(after) => self.publish(key, after),
                Err(read_err) => {
                    warn!(error = %read_err, "Post-failure re-read failed, keeping last snapshot");
                }
            }
            return Err(err.into());
        }

        let new_state = self.reader.read(key).await?;
        self.publish(key, new_state.clone());

        debug!(
            pending = %new_state.pending_amount,
            actual = %new_state.actual_amount,
            "Intent complete"
        );

        Ok(new_state)
    }

    /// Current snapshot for UI display.
    ///
    /// Pull-based and idempotent: two calls without an intervening execute
    /// return identical snapshots. A never-observed key materializes as an
    /// unregistered snapshot with unknown amounts.
    pub fn current_state(&self, key: &BalanceKey) -> BalanceState {
        if let Some(state) = self.states.read().get(key) {
            return state.clone();
        }
        self.states
            .write()
            .entry(*key)
            .or_insert_with(|| BalanceState::unregistered(0))
            .clone()
    }

    /// Re-read one balance from the ledger without mutating it.
    ///
    /// Takes the key lock so a refresh never observes the middle of an
    /// in-flight operation.
    pub async fn refresh(&self, key: &BalanceKey) -> Result<BalanceState, OrchestratorError> {
        let lock = self.key_lock(key);
        let _guard = lock.lock().await;

        let state = self.reader.read(key).await?;
        self.publish(key, state.clone());
        Ok(state)
    }

    /// Every balance currently tracked.
    pub fn tracked(&self) -> Vec<BalanceKey> {
        self.states.read().keys().copied().collect()
    }

    /// Drop a balance from tracking. Called when the owning key or token
    /// entry is removed by the user; the external store owns that decision.
    pub fn untrack(&self, key: &BalanceKey) {
        self.states.write().remove(key);
        self.locks.lock().remove(key);
    }

    /// Generate the proofs each planned call requires.
    ///
    /// Proof generation is long-running and CPU-bound; it happens here,
    /// once per call, strictly after planning and before submission. A
    /// failure aborts the intent with nothing submitted.
    async fn prove_plan(
        &self,
        key: &BalanceKey,
        plan: CallPlan,
    ) -> Result<Vec<ProvenCall>, OrchestratorError> {
        let mut proven = Vec::with_capacity(plan.len());
        for call in plan.calls {
            let sigma = match call.sigma_request(key.key_fingerprint) {
                Some(request) => Some(self.proofs.prove_sigma(request).await?),
                None => None,
            };
            let range = match call.range_amount() {
                Some(amount) => Some(
                    self.proofs
                        .prove_range(amount, self.config.range_proof_bits)
                        .await?,
                ),
                None => None,
            };
            debug!(
                call = call.name(),
                sigma = sigma.is_some(),
                range = range.is_some(),
                "Proofs generated"
            );
            proven.push(ProvenCall {
                call,
                proofs: ProofBundle { sigma, range },
            });
        }
        Ok(proven)
    }

    /// Publish a snapshot confirmed by a successful read.
    fn publish(&self, key: &BalanceKey, state: BalanceState) {
        self.states.write().insert(*key, state);
    }

    /// Get or create the mutex serializing operations on `key`.
    fn key_lock(&self, key: &BalanceKey) -> Arc<tokio::sync::Mutex<()>> {
        self.locks.lock().entry(*key).or_default().clone()
    }
}
