//! Contract lifecycle classification.
//!
//! A contract's status is a pure function of its end date and the current
//! instant. Stored statuses are caches; [`recompute_all`] refreshes them.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config;
use crate::models::{Contract, ContractStatus};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days until `end_date`, rounded up.
///
/// An end date later today yields `0`; an end date that passed less than a
/// full day ago also yields `0`; only a full day in the past goes negative.
pub fn days_until_expiry(end_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (end_date - now).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Classify with the default seven-day window.
pub fn classify(end_date: DateTime<Utc>, now: DateTime<Utc>) -> ContractStatus {
    classify_with_window(end_date, now, config::EXPIRY_WINDOW_DAYS)
}

/// Classify against an explicit expiring-soon window, in days.
pub fn classify_with_window(
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window_days: i64,
) -> ContractStatus {
    let days = days_until_expiry(end_date, now);
    if days < 0 {
        ContractStatus::Expired
    } else if days <= window_days {
        ContractStatus::ExpiringSoon
    } else {
        ContractStatus::Active
    }
}

/// Return the collection with every cached status replaced by a fresh
/// classification. Persisting the result is the caller's concern.
pub fn recompute_all(contracts: Vec<Contract>, now: DateTime<Utc>) -> Vec<Contract> {
    recompute_all_with_window(contracts, now, config::EXPIRY_WINDOW_DAYS)
}

pub fn recompute_all_with_window(
    contracts: Vec<Contract>,
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<Contract> {
    let mut changed = 0usize;
    let contracts: Vec<Contract> = contracts
        .into_iter()
        .map(|mut c| {
            let status = classify_with_window(c.end_date, now, window_days);
            if status != c.status {
                changed += 1;
                c.status = status;
            }
            c
        })
        .collect();
    debug!(total = contracts.len(), changed, "recomputed contract statuses");
    contracts
}
