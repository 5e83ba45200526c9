//! # Balance Reader Service
//!
//! One `read` is three concurrent flag queries, then (for registered pairs)
//! a ciphertext fetch and two concurrent local decryptions.

use crate::error::ReadError;
use crate::ports::LedgerQueryGateway;
use shared_crypto::BalanceDecryptor;
use shared_types::{Amount, BalanceKey, BalanceState, LedgerError};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Reader configuration.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Deadline for each round of ledger queries. Decryption is local and
    /// bounded by the solver's own attempt budget instead.
    pub query_deadline: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            query_deadline: Duration::from_secs(10),
        }
    }
}

/// Loads authoritative `BalanceState` snapshots.
pub struct BalanceReader {
    ledger: Arc<dyn LedgerQueryGateway>,
    decryptor: Arc<dyn BalanceDecryptor>,
    config: ReaderConfig,
}

impl BalanceReader {
    /// Create a reader over the given collaborators.
    pub fn new(
        ledger: Arc<dyn LedgerQueryGateway>,
        decryptor: Arc<dyn BalanceDecryptor>,
        config: ReaderConfig,
    ) -> Self {
        Self {
            ledger,
            decryptor,
            config,
        }
    }

    /// Read the current state of one balance.
    ///
    /// No retries here; the caller owns retry policy since reads are
    /// side-effect free.
    pub async fn read(&self, key: &BalanceKey) -> Result<BalanceState, ReadError> {
        let (is_registered, is_frozen, is_normalized) = self
            .bounded(async {
                tokio::try_join!(
                    self.ledger.is_registered(key.account, key.token),
                    self.ledger.is_frozen(key.account, key.token),
                    self.ledger.is_normalized(key.account, key.token),
                )
            })
            .await?;

        if !is_registered {
            debug!(account = %hex_prefix(&key.account), "Pair unregistered, synthesizing state");
            return Ok(BalanceState::unregistered(unix_now()));
        }

        let (pending_ciphertext, actual_ciphertext) = self
            .bounded(self.ledger.encrypted_balances(key.account, key.token))
            .await?;

        let (pending, actual) = tokio::try_join!(
            self.decryptor.decrypt(&pending_ciphertext, &key.key_fingerprint),
            self.decryptor.decrypt(&actual_ciphertext, &key.key_fingerprint),
        )?;

        debug!(
            account = %hex_prefix(&key.account),
            pending,
            actual,
            is_frozen,
            is_normalized,
            "Balance state read"
        );

        Ok(BalanceState {
            is_registered: true,
            is_frozen,
            is_normalized,
            pending_amount: Amount::Known(pending),
            actual_amount: Amount::Known(actual),
            pending_ciphertext: Some(pending_ciphertext),
            actual_ciphertext: Some(actual_ciphertext),
            last_observed_at: unix_now(),
        })
    }

    /// Apply the query deadline to one round of ledger calls.
    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, LedgerError>>,
    ) -> Result<T, ReadError> {
        let deadline = self.config.query_deadline;
        match tokio::time::timeout(deadline, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ReadError::Ledger(LedgerError::DeadlineExceeded {
                deadline_ms: deadline.as_millis() as u64,
            })),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Short hex prefix of an address for log lines.
fn hex_prefix(bytes: &[u8; 32]) -> String {
    bytes[..4].iter().map(|b| format!("{b:02x}")).collect()
}
