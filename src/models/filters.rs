use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contract::{Contract, ContractStatus};

// ---------------------------------------------------------------------------
// ContractFilters — Optional-field query object
// ---------------------------------------------------------------------------

/// Multi-predicate contract filter.
///
/// All fields are optional. When `None`, the corresponding predicate is
/// skipped; present predicates are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFilters {
    pub search: Option<String>,
    pub status: Option<ContractStatus>,
    /// Lower bound of the query window, compared against the contract end date.
    pub start_date: Option<DateTime<Utc>>,
    /// Upper bound of the query window, compared against the contract start date.
    pub end_date: Option<DateTime<Utc>>,
    pub responsible: Option<String>,
    pub contracting_company: Option<String>,
}

impl ContractFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn status(mut self, status: ContractStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to contracts whose active window overlaps `[start, end]`.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn starting_from(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn ending_by(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn responsible(mut self, name: impl Into<String>) -> Self {
        self.responsible = Some(name.into());
        self
    }

    pub fn contracting_company(mut self, company: impl Into<String>) -> Self {
        self.contracting_company = Some(company.into());
        self
    }

    /// `true` when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.responsible.is_none()
            && self.contracting_company.is_none()
    }

    /// Check a single contract against every present predicate.
    pub fn matches(&self, contract: &Contract) -> bool {
        if let Some(status) = self.status {
            if contract.status != status {
                return false;
            }
        }
        if let Some(ref text) = self.search {
            if !contract.search_text().contains(&text.to_lowercase()) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if start > contract.end_date {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if end < contract.start_date {
                return false;
            }
        }
        if let Some(ref responsible) = self.responsible {
            if &contract.internal_responsible != responsible {
                return false;
            }
        }
        if let Some(ref company) = self.contracting_company {
            if &contract.contracting_company != company {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Closed set of sortable contract fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    ContractingCompany,
    ContractedParty,
    StartDate,
    EndDate,
    Value,
    Status,
    Responsible,
    CreatedAt,
}

/// Comparable projection of a contract field.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum SortKey {
    Text(String),
    Number(f64),
    Instant(i64),
    Rank(u8),
}

impl SortField {
    pub fn key(self, contract: &Contract) -> SortKey {
        match self {
            SortField::Name => SortKey::Text(contract.name.to_lowercase()),
            SortField::ContractingCompany => {
                SortKey::Text(contract.contracting_company.to_lowercase())
            }
            SortField::ContractedParty => SortKey::Text(contract.contracted_party.to_lowercase()),
            SortField::Responsible => SortKey::Text(contract.internal_responsible.to_lowercase()),
            SortField::StartDate => SortKey::Instant(contract.start_date.timestamp_millis()),
            SortField::EndDate => SortKey::Instant(contract.end_date.timestamp_millis()),
            SortField::CreatedAt => SortKey::Instant(contract.created_at.timestamp_millis()),
            SortField::Value => SortKey::Number(contract.value),
            SortField::Status => SortKey::Rank(contract.status.urgency_rank()),
        }
    }
}
