//! # Lifecycle Flow Tests
//!
//! The full register → deposit → rollover → withdraw journey, plus the
//! recovery intents (normalize, unfreeze) and read-only refresh.

#[cfg(test)]
mod tests {
    use crate::harness::{LedgerRecord, TestEnv};
    use cb_02_operation_sequencer::{IllegalTransition, OperationIntent};
    use cb_04_lifecycle_orchestrator::OrchestratorError;
    use shared_types::{Amount, EncryptionKey};

    const ACCOUNT: [u8; 32] = [0xA1; 32];
    const TOKEN: [u8; 32] = [0x70; 32];

    #[tokio::test(start_paused = true)]
    async fn test_full_lifecycle_scenario() {
        let env = TestEnv::new();

        // Unregistered key → register
        let key = env.register(ACCOUNT, TOKEN).await.unwrap();
        let state = env.orchestrator.current_state(&key);
        assert!(state.is_registered);
        assert_eq!(state.actual_amount, Amount::Known(0));
        assert_eq!(state.pending_amount, Amount::Known(0));

        // Deposit 100 → pending reflects +100 after reread
        let state = env
            .orchestrator
            .execute(&key, OperationIntent::Deposit { amount: 100 })
            .await
            .unwrap();
        assert_eq!(state.pending_amount, Amount::Known(100));
        assert_eq!(state.actual_amount, Amount::Known(0));

        // Rollover → pending moves to actual, normalized again
        let state = env
            .orchestrator
            .execute(&key, OperationIntent::Rollover)
            .await
            .unwrap();
        assert_eq!(state.pending_amount, Amount::Known(0));
        assert_eq!(state.actual_amount, Amount::Known(100));
        assert!(state.is_normalized);

        // Withdraw 40 → actual 60
        let state = env
            .orchestrator
            .execute(&key, OperationIntent::Withdraw { amount: 40 })
            .await
            .unwrap();
        assert_eq!(state.actual_amount, Amount::Known(60));

        // Withdraw 1000 → illegal, state unchanged at 60
        let err = env
            .orchestrator
            .execute(&key, OperationIntent::Withdraw { amount: 1000 })
            .await
            .unwrap_err();
        match err {
            OrchestratorError::Illegal(illegal) => {
                assert!(illegal.reason().starts_with("insufficient actual balance"));
            }
            other => panic!("expected illegal transition, got {other}"),
        }
        assert_eq!(
            env.orchestrator.current_state(&key).actual_amount,
            Amount::Known(60)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutating_intents_require_registration() {
        let env = TestEnv::new();
        let key = env.balance_key(ACCOUNT, TOKEN, &EncryptionKey([0xE0; 32]));

        let err = env
            .orchestrator
            .execute(&key, OperationIntent::Deposit { amount: 10 })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrchestratorError::Illegal(IllegalTransition::NotRegistered)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transfer_credits_recipient_pending() {
        let env = TestEnv::new();
        let sender = env.register(ACCOUNT, TOKEN).await.unwrap();
        let recipient_account = [0xB2; 32];
        let recipient_encryption_key = EncryptionKey([0xE2; 32]);
        let recipient = env.balance_key(recipient_account, TOKEN, &recipient_encryption_key);
        env.orchestrator
            .execute(
                &recipient,
                OperationIntent::Register {
                    encryption_key: recipient_encryption_key,
                },
            )
            .await
            .unwrap();

        env.orchestrator
            .execute(&sender, OperationIntent::Deposit { amount: 100 })
            .await
            .unwrap();
        env.orchestrator
            .execute(&sender, OperationIntent::Rollover)
            .await
            .unwrap();

        let state = env
            .orchestrator
            .execute(
                &sender,
                OperationIntent::Transfer {
                    amount: 30,
                    recipient: recipient_account,
                    recipient_key: recipient_encryption_key,
                    auditor_keys: vec![EncryptionKey([0xAD; 32])],
                },
            )
            .await
            .unwrap();
        assert_eq!(state.actual_amount, Amount::Known(70));

        let recipient_state = env.orchestrator.refresh(&recipient).await.unwrap();
        assert_eq!(recipient_state.pending_amount, Amount::Known(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_normalize_unblocks_spends() {
        let env = TestEnv::new();
        let key = env.balance_key(ACCOUNT, TOKEN, &EncryptionKey([0xE0; 32]));
        env.ledger.seed(
            ACCOUNT,
            TOKEN,
            LedgerRecord {
                registered: true,
                normalized: false,
                actual: 50,
                ..LedgerRecord::default()
            },
        );

        let err = env
            .orchestrator
            .execute(&key, OperationIntent::Withdraw { amount: 10 })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrchestratorError::Illegal(IllegalTransition::NotNormalized)
        );

        let state = env
            .orchestrator
            .execute(&key, OperationIntent::Normalize)
            .await
            .unwrap();
        assert!(state.is_normalized);

        let state = env
            .orchestrator
            .execute(&key, OperationIntent::Withdraw { amount: 10 })
            .await
            .unwrap();
        assert_eq!(state.actual_amount, Amount::Known(40));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unfreeze_via_key_rotation() {
        let env = TestEnv::new();
        let key = env.balance_key(ACCOUNT, TOKEN, &EncryptionKey([0xE0; 32]));
        env.ledger.seed(
            ACCOUNT,
            TOKEN,
            LedgerRecord {
                registered: true,
                normalized: true,
                frozen: true,
                actual: 50,
                ..LedgerRecord::default()
            },
        );

        let err = env
            .orchestrator
            .execute(&key, OperationIntent::Withdraw { amount: 10 })
            .await
            .unwrap_err();
        assert_eq!(err, OrchestratorError::Illegal(IllegalTransition::Frozen));

        let new_key = EncryptionKey([0xE9; 32]);
        let state = env
            .orchestrator
            .execute(
                &key,
                OperationIntent::Unfreeze {
                    new_encryption_key: new_key,
                },
            )
            .await
            .unwrap();
        assert!(!state.is_frozen);
        assert_eq!(env.ledger.record(ACCOUNT, TOKEN).encryption_key, Some(new_key));

        let state = env
            .orchestrator
            .execute(&key, OperationIntent::Withdraw { amount: 10 })
            .await
            .unwrap();
        assert_eq!(state.actual_amount, Amount::Known(40));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_observes_out_of_band_changes() {
        let env = TestEnv::new();
        let key = env.register(ACCOUNT, TOKEN).await.unwrap();

        // Funds arrive outside this wallet's control (another device, an
        // incoming transfer).
        let mut record = env.ledger.record(ACCOUNT, TOKEN);
        record.pending = 25;
        env.ledger.seed(ACCOUNT, TOKEN, record);

        // The cache still shows the last confirmed snapshot.
        assert_eq!(
            env.orchestrator.current_state(&key).pending_amount,
            Amount::Known(0)
        );

        let state = env.orchestrator.refresh(&key).await.unwrap();
        assert_eq!(state.pending_amount, Amount::Known(25));
        assert_eq!(
            env.orchestrator.current_state(&key).pending_amount,
            Amount::Known(25)
        );
    }
}
