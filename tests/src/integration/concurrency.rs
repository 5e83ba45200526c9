//! # Concurrency Tests
//!
//! Per-key serialization and cross-key parallelism, asserted structurally
//! (what each operation observed) rather than by wall-clock timing.

#[cfg(test)]
mod tests {
    use crate::harness::TestEnv;
    use cb_02_operation_sequencer::{IllegalTransition, OperationIntent};
    use cb_04_lifecycle_orchestrator::OrchestratorError;
    use shared_types::Amount;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    const TOKEN: [u8; 32] = [0x70; 32];

    #[tokio::test(start_paused = true)]
    async fn test_same_key_executes_serialize() {
        // Slow proving widens the window in which interleaving would occur.
        let env = TestEnv::with_delays(Duration::from_millis(5), Duration::from_millis(50));
        let key = env.register([0xA1; 32], TOKEN).await.unwrap();

        env.orchestrator
            .execute(&key, OperationIntent::Deposit { amount: 100 })
            .await
            .unwrap();
        env.orchestrator
            .execute(&key, OperationIntent::Rollover)
            .await
            .unwrap();

        // Two concurrent withdrawals of 60 from a balance of 100. If the
        // cycles interleaved, both would observe 100 and both would pass
        // the precondition. Serialized, the loser must observe the
        // winner's completed state (40) and fail the sufficiency check.
        let a = env.orchestrator.clone();
        let b = env.orchestrator.clone();
        let (ra, rb) = tokio::join!(
            a.execute(&key, OperationIntent::Withdraw { amount: 60 }),
            b.execute(&key, OperationIntent::Withdraw { amount: 60 }),
        );

        let (ok, err) = match (ra, rb) {
            (Ok(state), Err(err)) | (Err(err), Ok(state)) => (state, err),
            (Ok(_), Ok(_)) => panic!("both withdrawals succeeded: cycles interleaved"),
            (Err(ea), Err(eb)) => panic!("both withdrawals failed: {ea} / {eb}"),
        };
        assert_eq!(ok.actual_amount, Amount::Known(40));
        assert_eq!(
            err,
            OrchestratorError::Illegal(IllegalTransition::InsufficientActualBalance {
                requested: 60,
                available: 40,
            })
        );

        assert_eq!(env.ledger.record([0xA1; 32], TOKEN).actual, 40);
    }

    #[tokio::test(start_paused = true)]
    async fn test_distinct_keys_proceed_in_parallel() {
        let env = TestEnv::with_delays(Duration::from_millis(5), Duration::from_millis(100));
        let key_a = env.register([0xA1; 32], TOKEN).await.unwrap();
        let key_b = env.register([0xB2; 32], TOKEN).await.unwrap();

        for key in [&key_a, &key_b] {
            env.orchestrator
                .execute(key, OperationIntent::Deposit { amount: 100 })
                .await
                .unwrap();
            env.orchestrator
                .execute(key, OperationIntent::Rollover)
                .await
                .unwrap();
        }

        let a = env.orchestrator.clone();
        let b = env.orchestrator.clone();
        let (ra, rb) = tokio::join!(
            a.execute(&key_a, OperationIntent::Withdraw { amount: 10 }),
            b.execute(&key_b, OperationIntent::Withdraw { amount: 10 }),
        );
        assert_eq!(ra.unwrap().actual_amount, Amount::Known(90));
        assert_eq!(rb.unwrap().actual_amount, Amount::Known(90));

        // Both keys' proofs were in flight at once: no cross-key blocking.
        assert!(
            env.prover.peak_in_flight.load(Ordering::SeqCst) >= 2,
            "proof generation never overlapped across keys"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_current_state_idempotent_between_executes() {
        let env = TestEnv::new();
        let key = env.register([0xA1; 32], TOKEN).await.unwrap();
        env.orchestrator
            .execute(&key, OperationIntent::Deposit { amount: 42 })
            .await
            .unwrap();

        let first = env.orchestrator.current_state(&key);
        let second = env.orchestrator.current_state(&key);
        assert_eq!(first, second);
    }
}
