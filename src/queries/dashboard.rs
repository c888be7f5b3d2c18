//! Dashboard statistics and chart series over a contract collection.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::calendar;
use crate::models::{
    ChartData, Contract, ContractStatus, DashboardStats, MonthlyExpiring, MonthlyVolume,
    StatusSlice,
};

const TRAILING_MONTHS: usize = 12;

/// Single-pass aggregate: counts per status, total value, and the value of
/// contracts whose end date falls in the current calendar month.
pub fn aggregate_stats(contracts: &[Contract], now: DateTime<Utc>) -> DashboardStats {
    let (month_start, month_end) = calendar::month_bounds(now);
    let mut stats = DashboardStats::default();

    for c in contracts {
        stats.total_contracts += 1;
        match c.status {
            ContractStatus::Active => stats.active_contracts += 1,
            ContractStatus::ExpiringSoon => stats.expiring_soon_contracts += 1,
            ContractStatus::Expired => stats.expired_contracts += 1,
        }
        stats.total_value += c.value;
        if month_start <= c.end_date && c.end_date <= month_end {
            stats.monthly_value += c.value;
        }
    }

    stats
}

/// Status distribution plus two trailing-12-month series keyed by `YYYY-MM`.
///
/// Contracts starting (or ending) outside the window are left out of the
/// corresponding series.
pub fn chart_series(contracts: &[Contract], now: DateTime<Utc>) -> ChartData {
    let mut counts: HashMap<ContractStatus, usize> = HashMap::new();
    let mut started: HashMap<String, (usize, f64)> = HashMap::new();
    let mut ending: HashMap<String, f64> = HashMap::new();

    for c in contracts {
        *counts.entry(c.status).or_default() += 1;

        let entry = started.entry(calendar::month_key(&c.start_date)).or_default();
        entry.0 += 1;
        entry.1 += c.value;

        *ending.entry(calendar::month_key(&c.end_date)).or_default() += c.value;
    }

    let status_distribution = ContractStatus::ALL
        .iter()
        .map(|&status| StatusSlice {
            status,
            name: status.label().to_string(),
            value: counts.get(&status).copied().unwrap_or(0),
            color: status.color().to_string(),
        })
        .collect();

    let months = calendar::trailing_months(now, TRAILING_MONTHS);

    let monthly_contracts = months
        .iter()
        .map(|m| {
            let key = calendar::month_key(m);
            let (count, value) = started.get(&key).copied().unwrap_or((0, 0.0));
            MonthlyVolume {
                month: calendar::month_label(m),
                key,
                contracts: count,
                value,
            }
        })
        .collect();

    let expiring_value = months
        .iter()
        .map(|m| {
            let key = calendar::month_key(m);
            let value = ending.get(&key).copied().unwrap_or(0.0);
            MonthlyExpiring {
                month: calendar::month_label(m),
                key,
                value,
            }
        })
        .collect();

    ChartData {
        status_distribution,
        monthly_contracts,
        expiring_value,
    }
}

// ---------------------------------------------------------------------------
// DashboardQuery
// ---------------------------------------------------------------------------

/// Query interface for dashboard aggregates over a loaded snapshot.
pub struct DashboardQuery<'a> {
    contracts: &'a [Contract],
    now: DateTime<Utc>,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(contracts: &'a [Contract], now: DateTime<Utc>) -> Self {
        Self { contracts, now }
    }

    pub fn stats(&self) -> DashboardStats {
        aggregate_stats(self.contracts, self.now)
    }

    pub fn chart_data(&self) -> ChartData {
        chart_series(self.contracts, self.now)
    }
}
