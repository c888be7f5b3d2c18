use serde::{Deserialize, Serialize};

use super::contract::ContractStatus;

// ---------------------------------------------------------------------------
// DashboardStats — Point-in-time aggregate over a contract collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_contracts: usize,
    pub active_contracts: usize,
    pub expiring_soon_contracts: usize,
    pub expired_contracts: usize,
    pub total_value: f64,
    /// Value of contracts whose end date falls in the current calendar month.
    pub monthly_value: f64,
}

impl DashboardStats {
    pub fn count_for(&self, status: ContractStatus) -> usize {
        match status {
            ContractStatus::Active => self.active_contracts,
            ContractStatus::ExpiringSoon => self.expiring_soon_contracts,
            ContractStatus::Expired => self.expired_contracts,
        }
    }
}

// ---------------------------------------------------------------------------
// ChartData — Status distribution and trailing-12-month series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSlice {
    pub status: ContractStatus,
    pub name: String,
    pub value: usize,
    pub color: String,
}

/// Contracts started in a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyVolume {
    /// `YYYY-MM` bucket key.
    pub key: String,
    /// Display label such as `jun/24`.
    pub month: String,
    pub contracts: usize,
    pub value: f64,
}

/// Value of contracts ending in a calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyExpiring {
    pub key: String,
    pub month: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub status_distribution: Vec<StatusSlice>,
    pub monthly_contracts: Vec<MonthlyVolume>,
    pub expiring_value: Vec<MonthlyExpiring>,
}

impl ChartData {
    pub fn count_for(&self, status: ContractStatus) -> usize {
        self.status_distribution
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.value)
            .unwrap_or(0)
    }
}
