//! # Operation Sequencer
//!
//! The legality state machine. Preconditions are re-validated here on every
//! plan, regardless of what the UI already checked: state may have changed
//! between the check and the call.

use crate::error::IllegalTransition;
use crate::intent::OperationIntent;
use crate::plan::{CallPlan, LedgerCall};
use shared_types::{Amount, BalanceKey, BalanceState, Ciphertext, EncryptionKey};

/// Builds call plans from (snapshot, intent) pairs. Stateless; the snapshot
/// passed in is never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationSequencer;

impl OperationSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `intent` is legal from `state` and, if so, build the
    /// ordered call plan that satisfies it.
    pub fn plan(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
        intent: OperationIntent,
    ) -> Result<CallPlan, IllegalTransition> {
        match intent {
            OperationIntent::Register { encryption_key } => {
                self.plan_register(key, state, encryption_key)
            }
            OperationIntent::Deposit { amount } => self.plan_deposit(key, state, amount),
            OperationIntent::Withdraw { amount } => self.plan_withdraw(key, state, amount),
            OperationIntent::Transfer {
                amount,
                recipient,
                recipient_key,
                auditor_keys,
            } => self.plan_transfer(key, state, amount, recipient, recipient_key, auditor_keys),
            OperationIntent::Normalize => self.plan_normalize(key, state),
            OperationIntent::Rollover => self.plan_rollover(key, state),
            OperationIntent::Unfreeze { new_encryption_key } => {
                self.plan_unfreeze(key, state, new_encryption_key)
            }
        }
    }

    fn plan_register(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
        encryption_key: EncryptionKey,
    ) -> Result<CallPlan, IllegalTransition> {
        if state.is_registered {
            return Err(IllegalTransition::AlreadyRegistered);
        }
        if !encryption_key.is_valid() {
            return Err(IllegalTransition::InvalidEncryptionKey);
        }
        Ok(CallPlan::single(LedgerCall::BindEncryptionKey {
            account: key.account,
            token: key.token,
            encryption_key,
        }))
    }

    fn plan_deposit(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
        amount: u64,
    ) -> Result<CallPlan, IllegalTransition> {
        if !state.is_registered {
            return Err(IllegalTransition::NotRegistered);
        }
        Ok(CallPlan::single(LedgerCall::Deposit {
            account: key.account,
            token: key.token,
            amount,
        }))
    }

    fn plan_withdraw(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
        amount: u64,
    ) -> Result<CallPlan, IllegalTransition> {
        let (actual_balance, actual_ciphertext) = self.spendable_actual(state, amount)?;
        Ok(CallPlan::single(LedgerCall::Withdraw {
            account: key.account,
            token: key.token,
            amount,
            actual_balance,
            actual_ciphertext,
        }))
    }

    fn plan_transfer(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
        amount: u64,
        recipient: shared_types::AccountAddress,
        recipient_key: EncryptionKey,
        auditor_keys: Vec<EncryptionKey>,
    ) -> Result<CallPlan, IllegalTransition> {
        let (actual_balance, actual_ciphertext) = self.spendable_actual(state, amount)?;
        if !recipient_key.is_valid() {
            return Err(IllegalTransition::InvalidRecipientKey);
        }
        Ok(CallPlan::single(LedgerCall::Transfer {
            account: key.account,
            token: key.token,
            amount,
            remaining_balance: actual_balance - amount,
            actual_ciphertext,
            recipient,
            recipient_key,
            auditor_keys,
        }))
    }

    fn plan_normalize(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
    ) -> Result<CallPlan, IllegalTransition> {
        if !state.is_registered {
            return Err(IllegalTransition::NotRegistered);
        }
        let actual = self.known_actual(state)?;
        let actual_ciphertext = state
            .actual_ciphertext
            .clone()
            .ok_or(IllegalTransition::ActualBalanceUnknown)?;
        Ok(CallPlan::single(LedgerCall::Normalize {
            account: key.account,
            token: key.token,
            claimed_amount: actual,
            unnormalized: vec![actual_ciphertext],
        }))
    }

    fn plan_rollover(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
    ) -> Result<CallPlan, IllegalTransition> {
        if !state.is_registered {
            return Err(IllegalTransition::NotRegistered);
        }
        let actual = self.known_actual(state)?;
        let pending = match state.pending_amount {
            Amount::Known(v) => v,
            Amount::Unknown => return Err(IllegalTransition::PendingBalanceUnknown),
        };
        let actual_ciphertext = state
            .actual_ciphertext
            .clone()
            .ok_or(IllegalTransition::ActualBalanceUnknown)?;
        let pending_ciphertext = state
            .pending_ciphertext
            .clone()
            .ok_or(IllegalTransition::PendingBalanceUnknown)?;
        let claimed_amount = actual
            .checked_add(pending)
            .ok_or(IllegalTransition::BalanceOverflow)?;

        // Rollover moves pending into actual; the follow-up normalize claims
        // the folded sum over both ciphertexts. Two calls, two transactions,
        // one plan.
        Ok(CallPlan {
            calls: vec![
                LedgerCall::Rollover {
                    account: key.account,
                    token: key.token,
                },
                LedgerCall::Normalize {
                    account: key.account,
                    token: key.token,
                    claimed_amount,
                    unnormalized: vec![actual_ciphertext, pending_ciphertext],
                },
            ],
        })
    }

    fn plan_unfreeze(
        &self,
        key: &BalanceKey,
        state: &BalanceState,
        new_encryption_key: EncryptionKey,
    ) -> Result<CallPlan, IllegalTransition> {
        if !state.is_registered {
            return Err(IllegalTransition::NotRegistered);
        }
        if !state.is_frozen {
            return Err(IllegalTransition::NotFrozen);
        }
        if !new_encryption_key.is_valid() {
            return Err(IllegalTransition::InvalidEncryptionKey);
        }
        Ok(CallPlan::single(LedgerCall::RotateEncryptionKey {
            account: key.account,
            token: key.token,
            new_key: new_encryption_key,
            unfreeze: true,
        }))
    }

    /// Shared precondition chain for spend-type intents: registered, not
    /// frozen, normalized, decrypted, and sufficient for `amount`.
    fn spendable_actual(
        &self,
        state: &BalanceState,
        amount: u64,
    ) -> Result<(u64, Ciphertext), IllegalTransition> {
        if !state.is_registered {
            return Err(IllegalTransition::NotRegistered);
        }
        if state.is_frozen {
            return Err(IllegalTransition::Frozen);
        }
        if !state.is_normalized {
            return Err(IllegalTransition::NotNormalized);
        }
        let actual = self.known_actual(state)?;
        if amount > actual {
            return Err(IllegalTransition::InsufficientActualBalance {
                requested: amount,
                available: actual,
            });
        }
        let ciphertext = state
            .actual_ciphertext
            .clone()
            .ok_or(IllegalTransition::ActualBalanceUnknown)?;
        Ok((actual, ciphertext))
    }

    fn known_actual(&self, state: &BalanceState) -> Result<u64, IllegalTransition> {
        match state.actual_amount {
            Amount::Known(v) => Ok(v),
            Amount::Unknown => Err(IllegalTransition::ActualBalanceUnknown),
        }
    }
}
