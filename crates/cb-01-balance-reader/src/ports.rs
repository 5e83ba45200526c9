//! Driven Ports (Outbound Dependencies)
//!
//! The ledger query surface the reader runs against. Wire encoding and RPC
//! transport live behind this seam.

use async_trait::async_trait;
use shared_types::{AccountAddress, Ciphertext, LedgerError, TokenAddress};

/// Read-only ledger queries for one (account, token) pair.
#[async_trait]
pub trait LedgerQueryGateway: Send + Sync {
    /// Whether an encryption key is bound to this pair on ledger.
    async fn is_registered(
        &self,
        account: AccountAddress,
        token: TokenAddress,
    ) -> Result<bool, LedgerError>;

    /// Whether the ledger currently blocks withdraw/transfer.
    async fn is_frozen(
        &self,
        account: AccountAddress,
        token: TokenAddress,
    ) -> Result<bool, LedgerError>;

    /// Whether the actual sub-balance is in canonical form.
    async fn is_normalized(
        &self,
        account: AccountAddress,
        token: TokenAddress,
    ) -> Result<bool, LedgerError>;

    /// Fetch the (pending, actual) ciphertexts.
    ///
    /// Only meaningful for registered pairs; the reader never calls this for
    /// an unregistered account.
    async fn encrypted_balances(
        &self,
        account: AccountAddress,
        token: TokenAddress,
    ) -> Result<(Ciphertext, Ciphertext), LedgerError>;
}
