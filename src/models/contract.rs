use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;

// ---------------------------------------------------------------------------
// ContractStatus — Derived lifecycle state
// ---------------------------------------------------------------------------

/// Lifecycle state of a contract, always derived from its end date.
///
/// The stored value on [`Contract::status`] is only a cache; see
/// [`crate::status::classify`] for the rule that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    #[default]
    Active,
    ExpiringSoon,
    Expired,
}

impl ContractStatus {
    /// All statuses in dashboard display order.
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Active,
        ContractStatus::ExpiringSoon,
        ContractStatus::Expired,
    ];

    /// Machine code used at the storage and JSON boundary.
    pub fn code(self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::ExpiringSoon => "expiring_soon",
            ContractStatus::Expired => "expired",
        }
    }

    /// Human-facing label used in CSV exports, reports and charts.
    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::Active => "Ativo",
            ContractStatus::ExpiringSoon => "Vencendo",
            ContractStatus::Expired => "Vencido",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ContractStatus::Active => config::COLOR_ACTIVE,
            ContractStatus::ExpiringSoon => config::COLOR_EXPIRING_SOON,
            ContractStatus::Expired => config::COLOR_EXPIRED,
        }
    }

    /// Sort rank by urgency: expired first, then expiring, then active.
    pub fn urgency_rank(self) -> u8 {
        match self {
            ContractStatus::Expired => 0,
            ContractStatus::ExpiringSoon => 1,
            ContractStatus::Active => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

// ---------------------------------------------------------------------------
// Attachments, comments and history
// ---------------------------------------------------------------------------

/// Metadata of the source document a contract was imported from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractFile {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    Created,
    Updated,
    Commented,
    StatusChanged,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub action: HistoryAction,
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub details: Option<String>,
}

/// Who may see and edit a contract. Enforcement belongs to the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPermissions {
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub can_view: Vec<String>,
    #[serde(default)]
    pub can_edit: Vec<String>,
}

// ---------------------------------------------------------------------------
// Contract — The central managed entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub name: String,
    pub contracting_company: String,
    pub contracted_party: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub value: f64,
    pub internal_responsible: String,
    pub responsible_email: String,
    #[serde(default)]
    pub status: ContractStatus,
    pub file: Option<ContractFile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    pub owner: Option<String>,
    #[serde(default)]
    pub permissions: ContractPermissions,
}

impl Contract {
    /// Create a contract with the mandatory window fields set and every
    /// descriptive field empty. Creation and update timestamps start at
    /// `start_date`; the status is left for the classifier to fill in.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contracting_company: String::new(),
            contracted_party: String::new(),
            start_date,
            end_date,
            value,
            internal_responsible: String::new(),
            responsible_email: String::new(),
            status: ContractStatus::default(),
            file: None,
            created_at: start_date,
            updated_at: start_date,
            comments: Vec::new(),
            history: Vec::new(),
            tags: Vec::new(),
            priority: Priority::default(),
            owner: None,
            permissions: ContractPermissions::default(),
        }
    }

    pub fn with_parties(
        mut self,
        contracting_company: impl Into<String>,
        contracted_party: impl Into<String>,
    ) -> Self {
        self.contracting_company = contracting_company.into();
        self.contracted_party = contracted_party.into();
        self
    }

    pub fn with_responsible(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.internal_responsible = name.into();
        self.responsible_email = email.into();
        self
    }

    /// Lower-cased haystack for free-text search.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.contracting_company, self.contracted_party, self.internal_responsible
        )
        .to_lowercase()
    }
}
