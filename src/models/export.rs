use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar;

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    /// Print-ready HTML report handed to the host for printing.
    Pdf,
    Json,
}

// ---------------------------------------------------------------------------
// ExportOptions
// ---------------------------------------------------------------------------

/// Inclusive end-date restriction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    #[serde(default = "default_true")]
    pub include_active: bool,
    #[serde(default = "default_true")]
    pub include_expiring: bool,
    #[serde(default = "default_true")]
    pub include_expired: bool,
    pub date_range: Option<DateRange>,
}

fn default_true() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            include_active: true,
            include_expiring: true,
            include_expired: true,
            date_range: None,
        }
    }
}

impl ExportOptions {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// ExportPreset — Named, pre-filled option sets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportPreset {
    AllContracts,
    ActiveOnly,
    ExpiringSoon,
    ExpiredOnly,
    /// Every status, restricted to contracts ending in the current month.
    ExpiringThisMonth,
}

impl ExportPreset {
    pub const ALL: [ExportPreset; 5] = [
        ExportPreset::AllContracts,
        ExportPreset::ActiveOnly,
        ExportPreset::ExpiringSoon,
        ExportPreset::ExpiredOnly,
        ExportPreset::ExpiringThisMonth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportPreset::AllContracts => "Todos os contratos",
            ExportPreset::ActiveOnly => "Apenas ativos",
            ExportPreset::ExpiringSoon => "Vencendo em breve",
            ExportPreset::ExpiredOnly => "Contratos vencidos",
            ExportPreset::ExpiringThisMonth => "Vencimentos do mês",
        }
    }

    pub fn options(self, format: ExportFormat, now: DateTime<Utc>) -> ExportOptions {
        let only = |active, expiring, expired| ExportOptions {
            format,
            include_active: active,
            include_expiring: expiring,
            include_expired: expired,
            date_range: None,
        };
        match self {
            ExportPreset::AllContracts => only(true, true, true),
            ExportPreset::ActiveOnly => only(true, false, false),
            ExportPreset::ExpiringSoon => only(false, true, false),
            ExportPreset::ExpiredOnly => only(false, false, true),
            ExportPreset::ExpiringThisMonth => {
                let (start, end) = calendar::month_bounds(now);
                ExportOptions {
                    date_range: Some(DateRange { start, end }),
                    ..only(true, true, true)
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ExportOutcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub file_name: String,
    pub records: usize,
}
