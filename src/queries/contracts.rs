//! In-memory contract filtering, sorting and lookups.
//!
//! Contracts are held as a plain slice; every query borrows it and returns
//! owned copies so callers can hand results straight to the export pipeline.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::models::{Contract, ContractFilters, SortField, SortOrder};
use crate::status;

// ---------------------------------------------------------------------------
// Free-standing operations
// ---------------------------------------------------------------------------

/// Keep only the contracts that satisfy every present predicate in `filters`.
pub fn filter(contracts: &[Contract], filters: &ContractFilters) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|c| filters.matches(c))
        .cloned()
        .collect()
}

/// Stable sort by a typed field.
pub fn sort(contracts: &mut [Contract], field: SortField, order: SortOrder) {
    contracts.sort_by(|a, b| {
        let ordering = field
            .key(a)
            .partial_cmp(&field.key(b))
            .unwrap_or(std::cmp::Ordering::Equal);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

// ---------------------------------------------------------------------------
// ContractQuery
// ---------------------------------------------------------------------------

/// Query interface over a loaded contract snapshot.
pub struct ContractQuery<'a> {
    contracts: &'a [Contract],
    now: DateTime<Utc>,
}

impl<'a> ContractQuery<'a> {
    /// Create a new `ContractQuery` over `contracts`, evaluated at `now`.
    pub fn new(contracts: &'a [Contract], now: DateTime<Utc>) -> Self {
        Self { contracts, now }
    }

    pub fn all(&self) -> &'a [Contract] {
        self.contracts
    }

    /// Retrieve a single contract by id.
    pub fn get(&self, id: &str) -> Option<&'a Contract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    pub fn filter(&self, filters: &ContractFilters) -> Vec<Contract> {
        filter(self.contracts, filters)
    }

    /// Filter, then sort the result.
    pub fn sorted(
        &self,
        filters: &ContractFilters,
        field: SortField,
        order: SortOrder,
    ) -> Vec<Contract> {
        let mut result = self.filter(filters);
        sort(&mut result, field, order);
        result
    }

    pub fn count(&self, filters: &ContractFilters) -> usize {
        self.contracts.iter().filter(|c| filters.matches(c)).count()
    }

    /// Distinct responsible names, sorted, for filter dropdowns.
    pub fn responsibles(&self) -> Vec<String> {
        distinct(self.contracts.iter().map(|c| c.internal_responsible.as_str()))
    }

    /// Distinct contracting companies, sorted, for filter dropdowns.
    pub fn contracting_companies(&self) -> Vec<String> {
        distinct(self.contracts.iter().map(|c| c.contracting_company.as_str()))
    }

    /// Contracts ending between now and `days` from now, soonest first.
    pub fn expiring_within(&self, days: i64) -> Vec<Contract> {
        let mut result: Vec<Contract> = self
            .contracts
            .iter()
            .filter(|c| {
                let remaining = status::days_until_expiry(c.end_date, self.now);
                (0..=days).contains(&remaining)
            })
            .cloned()
            .collect();
        sort(&mut result, SortField::EndDate, SortOrder::Asc);
        result
    }
}

fn distinct<'s>(values: impl Iterator<Item = &'s str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
