//! Async wrapper tests (requires the `async` feature).

#![cfg(feature = "async")]

mod common;

use jurisync_engine::notifications::RecordingMailer;
use jurisync_engine::{AsyncContractEngine, ContractEngine, EngineError, InMemoryRepository};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().build().unwrap()
}

fn builder() -> jurisync_engine::ContractEngineBuilder {
    ContractEngine::builder()
        .repository(InMemoryRepository::new(common::sample_contracts()))
        .mailer(RecordingMailer::new())
        .now(common::now())
}

#[test]
fn async_build_and_stats() {
    runtime().block_on(async {
        let engine = AsyncContractEngine::build(builder()).await.unwrap();
        let stats = engine.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_contracts, 6);
        assert_eq!(stats.expiring_soon_contracts, 3);
    });
}

#[test]
fn async_daily_check_sends_due_notices() {
    runtime().block_on(async {
        let engine = AsyncContractEngine::build(builder()).await.unwrap();
        let report = engine.run_daily_check().await.unwrap();
        assert_eq!(report.sent, 2);
        assert_eq!(engine.reload().await.unwrap(), 6);
    });
}

#[test]
fn async_run_propagates_engine_errors() {
    runtime().block_on(async {
        let engine = AsyncContractEngine::new(builder().build().unwrap());
        let result = engine
            .run(|e| e.add_comment("missing", "x", "text"))
            .await;
        assert!(matches!(result, Err(EngineError::NotFound(_))));
    });
}

#[test]
fn async_build_reports_invalid_configuration() {
    runtime().block_on(async {
        let result = AsyncContractEngine::build(builder().expiry_window_days(0)).await;
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    });
}
