//! Expiry notice scheduling and best-effort sequential dispatch.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::templates;
use super::transport::Mailer;
use crate::config;
use crate::models::{Contract, DispatchFailure, DispatchReport};
use crate::status;

/// Contracts whose end date is exactly seven days away or due today.
///
/// This is a point-in-time trigger: a contract checked on day 6 is not
/// picked up even if nobody ran the check on day 7.
pub fn due_for_notification(contracts: &[Contract], now: DateTime<Utc>) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|c| {
            let days = status::days_until_expiry(c.end_date, now);
            config::NOTIFICATION_OFFSETS.contains(&days)
        })
        .cloned()
        .collect()
}

/// Render one notice per contract and send them one after another.
///
/// Every send is tried independently; a rejection or transport error is
/// counted in `failed` and the batch continues.
pub fn dispatch_all<M: Mailer + ?Sized>(
    contracts: &[Contract],
    mailer: &mut M,
    now: DateTime<Utc>,
    base_url: &str,
) -> DispatchReport {
    let mut report = DispatchReport {
        notifications: contracts
            .iter()
            .map(|c| templates::render(c, now, base_url))
            .collect(),
        ..DispatchReport::default()
    };

    for notification in &report.notifications {
        match mailer.send(notification) {
            Ok(true) => report.sent += 1,
            Ok(false) => {
                warn!(
                    contract_id = %notification.contract_id,
                    "expiry notice rejected by transport"
                );
                report.failed += 1;
                report.failures.push(DispatchFailure {
                    contract_id: notification.contract_id.clone(),
                    reason: "rejected by transport".to_string(),
                });
            }
            Err(e) => {
                warn!(contract_id = %notification.contract_id, error = %e, "expiry notice failed");
                report.failed += 1;
                report.failures.push(DispatchFailure {
                    contract_id: notification.contract_id.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(sent = report.sent, failed = report.failed, "notification batch finished");
    report
}

/// Pick the contracts due today and dispatch their notices.
pub fn run_daily_check<M: Mailer + ?Sized>(
    contracts: &[Contract],
    mailer: &mut M,
    now: DateTime<Utc>,
    base_url: &str,
) -> DispatchReport {
    let due = due_for_notification(contracts, now);
    dispatch_all(&due, mailer, now, base_url)
}

// ---------------------------------------------------------------------------
// NotificationScheduler
// ---------------------------------------------------------------------------

/// Scheduler bound to a mailer, a link base URL and a reference instant.
pub struct NotificationScheduler<'a, M: Mailer + ?Sized> {
    mailer: &'a mut M,
    base_url: &'a str,
    now: DateTime<Utc>,
}

impl<'a, M: Mailer + ?Sized> NotificationScheduler<'a, M> {
    pub fn new(mailer: &'a mut M, base_url: &'a str, now: DateTime<Utc>) -> Self {
        Self {
            mailer,
            base_url,
            now,
        }
    }

    pub fn due(&self, contracts: &[Contract]) -> Vec<Contract> {
        due_for_notification(contracts, self.now)
    }

    pub fn dispatch_all(&mut self, contracts: &[Contract]) -> DispatchReport {
        dispatch_all(contracts, &mut *self.mailer, self.now, self.base_url)
    }

    pub fn run_daily_check(&mut self, contracts: &[Contract]) -> DispatchReport {
        run_daily_check(contracts, &mut *self.mailer, self.now, self.base_url)
    }
}
