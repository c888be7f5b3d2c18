//! JuriSync contract lifecycle engine.
//!
//! Derives contract status from end dates, filters and aggregates contracts
//! for dashboards, schedules expiry notices, and produces CSV, JSON and
//! printable report exports. Storage, mail delivery and file output are
//! supplied by the host through the [`ContractRepository`], [`Mailer`] and
//! [`OutputSink`](export::OutputSink) traits.
//!
//! # Quick start
//!
//! ```no_run
//! use jurisync_engine::{ContractEngine, ContractFilters, ContractStatus};
//! use jurisync_engine::export::DirectorySink;
//! use jurisync_engine::models::{ExportFormat, ExportOptions};
//!
//! let mut engine = ContractEngine::builder().build().unwrap();
//!
//! // Dashboard
//! let stats = engine.dashboard().stats();
//! let expiring = engine
//!     .contracts()
//!     .filter(&ContractFilters::new().status(ContractStatus::ExpiringSoon));
//!
//! // Daily expiry notices
//! let report = engine.run_daily_check();
//!
//! // Export
//! let mut sink = DirectorySink::new("exports").unwrap();
//! engine.exports().dispatch(&ExportOptions::new(ExportFormat::Csv), &mut sink).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod calendar;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod notifications;
pub mod queries;
pub mod repository;
pub mod seed;
pub mod status;

#[cfg(feature = "async")]
pub use async_client::AsyncContractEngine;
pub use error::{EngineError, Result};
pub use models::{Contract, ContractFilters, ContractStatus};
pub use notifications::Mailer;
pub use repository::{ContractRepository, InMemoryRepository, JsonFileRepository};

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use tracing::info;

use models::{Comment, DispatchReport, HistoryAction, HistoryEntry};
use notifications::LogMailer;

// ---------------------------------------------------------------------------
// ContractEngineBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ContractEngine`].
///
/// Use [`ContractEngine::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ContractEngineBuilder::build).
pub struct ContractEngineBuilder {
    repository: Option<Box<dyn ContractRepository + Send>>,
    mailer: Option<Box<dyn Mailer + Send>>,
    base_url: String,
    now: Option<DateTime<Utc>>,
    expiry_window_days: i64,
}

impl Default for ContractEngineBuilder {
    fn default() -> Self {
        Self {
            repository: None,
            mailer: None,
            base_url: config::DEFAULT_BASE_URL.to_string(),
            now: None,
            expiry_window_days: config::EXPIRY_WINDOW_DAYS,
        }
    }
}

impl ContractEngineBuilder {
    /// Set the contract store.
    ///
    /// Defaults to a [`JsonFileRepository`] in the platform data directory
    /// (e.g. `~/.local/share/jurisync/contracts.json` on Linux).
    pub fn repository<R: ContractRepository + Send + 'static>(mut self, repository: R) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Set the notice transport. Defaults to [`LogMailer`].
    pub fn mailer<M: Mailer + Send + 'static>(mut self, mailer: M) -> Self {
        self.mailer = Some(Box::new(mailer));
        self
    }

    /// Base URL for contract deep links in notices.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Pin the engine clock to a fixed instant instead of the system time.
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Days before the end date at which a contract counts as expiring soon.
    ///
    /// Defaults to 7. Must be at least 1.
    pub fn expiry_window_days(mut self, days: i64) -> Self {
        self.expiry_window_days = days;
        self
    }

    /// Build the engine, loading the contracts and refreshing their statuses.
    ///
    /// The refreshed statuses are kept in memory only; call
    /// [`ContractEngine::refresh_statuses`] to write them back.
    pub fn build(self) -> Result<ContractEngine> {
        if self.expiry_window_days < 1 {
            return Err(EngineError::InvalidArgument(format!(
                "expiry window must be at least 1 day, got {}",
                self.expiry_window_days
            )));
        }

        let repository: Box<dyn ContractRepository + Send> = match self.repository {
            Some(repository) => repository,
            None => Box::new(JsonFileRepository::at_default_location()),
        };
        let mailer: Box<dyn Mailer + Send> = match self.mailer {
            Some(mailer) => mailer,
            None => Box::new(LogMailer),
        };

        let mut engine = ContractEngine {
            repository,
            mailer,
            base_url: self.base_url,
            pinned_now: self.now,
            expiry_window_days: self.expiry_window_days,
            contracts: Vec::new(),
            stored_statuses: HashMap::new(),
        };
        engine.reload()?;
        Ok(engine)
    }
}

// ---------------------------------------------------------------------------
// ContractEngine
// ---------------------------------------------------------------------------

/// The main entry point for the contract engine.
///
/// Holds a snapshot of the contracts loaded from the repository and exposes
/// query interfaces as lightweight borrowing wrappers. Mutations go through
/// the engine and are written back to the repository immediately.
///
/// Created via [`ContractEngine::builder()`].
pub struct ContractEngine {
    repository: Box<dyn ContractRepository + Send>,
    mailer: Box<dyn Mailer + Send>,
    base_url: String,
    pinned_now: Option<DateTime<Utc>>,
    expiry_window_days: i64,
    contracts: Vec<Contract>,
    /// Status of each contract as last read from or written to the repository.
    stored_statuses: HashMap<String, ContractStatus>,
}

impl ContractEngine {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> ContractEngineBuilder {
        ContractEngineBuilder::default()
    }

    /// The instant the engine evaluates against: the pinned clock if set,
    /// otherwise the system time.
    pub fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    /// Pin (or unpin, with `None`) the engine clock.
    ///
    /// Cached statuses are not touched; call [`reload`](Self::reload) or
    /// [`refresh_statuses`](Self::refresh_statuses) afterwards.
    pub fn set_now(&mut self, now: Option<DateTime<Utc>>) {
        self.pinned_now = now;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn expiry_window_days(&self) -> i64 {
        self.expiry_window_days
    }

    /// The current in-memory snapshot.
    pub fn snapshot(&self) -> &[Contract] {
        &self.contracts
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the contract filter/sort interface.
    pub fn contracts(&self) -> queries::ContractQuery<'_> {
        queries::ContractQuery::new(&self.contracts, self.now())
    }

    /// Access dashboard statistics and chart series.
    pub fn dashboard(&self) -> queries::DashboardQuery<'_> {
        queries::DashboardQuery::new(&self.contracts, self.now())
    }

    /// Access the export pipeline.
    pub fn exports(&self) -> export::ExportQuery<'_> {
        export::ExportQuery::new(&self.contracts, self.now())
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Reload from the repository and refresh cached statuses in memory.
    ///
    /// Returns the number of contracts loaded.
    pub fn reload(&mut self) -> Result<usize> {
        let loaded = self.repository.load()?;
        self.stored_statuses = statuses_by_id(&loaded);
        self.contracts =
            status::recompute_all_with_window(loaded, self.now(), self.expiry_window_days);
        Ok(self.contracts.len())
    }

    /// Recompute every cached status and write the collection back.
    ///
    /// Returns the number of contracts whose stored status changed.
    pub fn refresh_statuses(&mut self) -> Result<usize> {
        let contracts = std::mem::take(&mut self.contracts);
        self.contracts =
            status::recompute_all_with_window(contracts, self.now(), self.expiry_window_days);
        let changed = self
            .contracts
            .iter()
            .filter(|c| self.stored_statuses.get(&c.id) != Some(&c.status))
            .count();
        self.save()?;
        Ok(changed)
    }

    /// Insert a new contract or replace the one with the same id.
    ///
    /// The status is derived, `updatedAt` is set to now, and a `created` or
    /// `updated` history entry is appended. A replaced contract keeps its
    /// stored `createdAt`, comments and history.
    pub fn upsert(&mut self, mut contract: Contract, user: &str) -> Result<()> {
        if contract.id.is_empty() {
            return Err(EngineError::InvalidArgument("contract id must not be empty".into()));
        }
        if contract.value < 0.0 || !contract.value.is_finite() {
            return Err(EngineError::InvalidArgument(format!(
                "contract value must be a non-negative amount, got {}",
                contract.value
            )));
        }

        let now = self.now();
        contract.status =
            status::classify_with_window(contract.end_date, now, self.expiry_window_days);
        contract.updated_at = now;

        let existing = self.contracts.iter().position(|c| c.id == contract.id);
        let action = match existing {
            Some(idx) => {
                let stored = &mut self.contracts[idx];
                contract.created_at = stored.created_at;
                contract.comments = std::mem::take(&mut stored.comments);
                contract.history = std::mem::take(&mut stored.history);
                HistoryAction::Updated
            }
            None => {
                contract.created_at = now;
                HistoryAction::Created
            }
        };
        push_history(&mut contract, action, user, None, now);

        match existing {
            Some(idx) => self.contracts[idx] = contract,
            None => self.contracts.push(contract),
        }
        self.save()
    }

    /// Append a comment to a contract.
    pub fn add_comment(&mut self, contract_id: &str, author: &str, text: &str) -> Result<Comment> {
        if text.trim().is_empty() {
            return Err(EngineError::InvalidArgument("comment text must not be empty".into()));
        }
        let now = self.now();
        let contract = self.find_mut(contract_id)?;

        let comment = Comment {
            id: format!("{}-c{}", contract.id, contract.comments.len() + 1),
            author: author.to_string(),
            text: text.trim().to_string(),
            created_at: now,
        };
        contract.comments.push(comment.clone());
        contract.updated_at = now;
        push_history(contract, HistoryAction::Commented, author, None, now);

        self.save()?;
        Ok(comment)
    }

    /// Append a history entry to a contract.
    pub fn record_history(
        &mut self,
        contract_id: &str,
        action: HistoryAction,
        user: &str,
        details: Option<&str>,
    ) -> Result<HistoryEntry> {
        let now = self.now();
        let contract = self.find_mut(contract_id)?;
        let entry = push_history(contract, action, user, details.map(str::to_string), now);
        self.save()?;
        Ok(entry)
    }

    // -- Notifications -----------------------------------------------------

    /// Contracts that trigger an expiry notice today.
    pub fn notifications_due(&self) -> Vec<Contract> {
        notifications::due_for_notification(&self.contracts, self.now())
    }

    /// Render and send a notice for each given contract, one at a time.
    pub fn dispatch_notifications(&mut self, contracts: &[Contract]) -> DispatchReport {
        let now = self.now();
        notifications::dispatch_all(contracts, &mut self.mailer, now, &self.base_url)
    }

    /// Send today's expiry notices for the loaded snapshot.
    pub fn run_daily_check(&mut self) -> DispatchReport {
        let now = self.now();
        info!(contracts = self.contracts.len(), "running daily expiry check");
        notifications::run_daily_check(&self.contracts, &mut self.mailer, now, &self.base_url)
    }

    fn save(&mut self) -> Result<()> {
        self.repository.save(&self.contracts)?;
        self.stored_statuses = statuses_by_id(&self.contracts);
        Ok(())
    }

    fn find_mut(&mut self, contract_id: &str) -> Result<&mut Contract> {
        self.contracts
            .iter_mut()
            .find(|c| c.id == contract_id)
            .ok_or_else(|| EngineError::NotFound(format!("contract '{contract_id}'")))
    }
}

fn statuses_by_id(contracts: &[Contract]) -> HashMap<String, ContractStatus> {
    contracts.iter().map(|c| (c.id.clone(), c.status)).collect()
}

fn push_history(
    contract: &mut Contract,
    action: HistoryAction,
    user: &str,
    details: Option<String>,
    now: DateTime<Utc>,
) -> HistoryEntry {
    let entry = HistoryEntry {
        id: format!("{}-h{}", contract.id, contract.history.len() + 1),
        action,
        user: user.to_string(),
        timestamp: now,
        details,
    };
    contract.history.push(entry.clone());
    entry
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ContractEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContractEngine(contracts={}, base_url={}, expiry_window={}d, clock={})",
            self.contracts.len(),
            self.base_url,
            self.expiry_window_days,
            if self.pinned_now.is_some() { "pinned" } else { "system" }
        )
    }
}
