//! Async wrapper around [`ContractEngine`] for use in async runtimes (Tokio, etc.).
//!
//! Runs engine operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! repository I/O and mail sends block. Notice dispatch stays strictly
//! sequential inside each call.
//!
//! # Example
//!
//! ```no_run
//! use jurisync_engine::{AsyncContractEngine, ContractEngine};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(async {
//!     let engine = AsyncContractEngine::build(ContractEngine::builder()).await.unwrap();
//!
//!     let report = engine.run_daily_check().await.unwrap();
//!     println!("sent {} / failed {}", report.sent, report.failed);
//! });
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{EngineError, Result};
use crate::models::{DashboardStats, DispatchReport};
use crate::{ContractEngine, ContractEngineBuilder};

/// Async wrapper around [`ContractEngine`].
///
/// The engine is protected by a [`Mutex`]; concurrent calls queue up behind
/// each other, so two daily checks never interleave their sends.
pub struct AsyncContractEngine {
    inner: Arc<Mutex<ContractEngine>>,
}

impl AsyncContractEngine {
    /// Wrap an already built engine.
    pub fn new(engine: ContractEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Build the engine on the blocking thread pool, since the initial load
    /// reads from the repository.
    pub async fn build(builder: ContractEngineBuilder) -> Result<Self> {
        let engine = tokio::task::spawn_blocking(move || builder.build())
            .await
            .map_err(|e| EngineError::InvalidArgument(format!("Task join error: {e}")))??;
        Ok(Self::new(engine))
    }

    /// Run an engine operation on the blocking thread pool.
    ///
    /// The closure receives `&mut ContractEngine` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut ContractEngine) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let engine = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = engine
                .lock()
                .map_err(|_| EngineError::InvalidArgument("engine lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| EngineError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Send today's expiry notices.
    pub async fn run_daily_check(&self) -> Result<DispatchReport> {
        self.run(|e| Ok(e.run_daily_check())).await
    }

    /// Compute dashboard statistics for the loaded snapshot.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.run(|e| Ok(e.dashboard().stats())).await
    }

    /// Reload contracts from the repository.
    pub async fn reload(&self) -> Result<usize> {
        self.run(|e| e.reload()).await
    }
}
