//! Driven Ports (Outbound Dependencies)

use async_trait::async_trait;
use cb_02_operation_sequencer::ProvenCall;
use shared_types::{LedgerError, TxHash};

/// Ledger mutation surface.
///
/// `submit` signs and sends one transaction and returns its hash
/// immediately; finality arrives later on the completion bus. A returned
/// error means the transaction was never accepted into the ledger's queue.
#[async_trait]
pub trait LedgerSubmitGateway: Send + Sync {
    /// Submit one proven call as an independently-signed transaction.
    async fn submit(&self, call: &ProvenCall) -> Result<TxHash, LedgerError>;
}
