//! Export pipeline: selection, CSV/JSON/report producers and dispatch to an
//! [`OutputSink`].

pub mod csv;
pub mod json;
pub mod report;
pub mod sink;

pub use self::csv::to_csv;
pub use self::json::to_json;
pub use self::report::to_report;
pub use self::sink::{Artifact, DirectorySink, MemorySink, OutputSink, RenderReady};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config;
use crate::error::{EngineError, Result};
use crate::models::{
    ChartData, Contract, ContractStatus, ExportFormat, ExportOptions, ExportOutcome, ExportPreset,
};
use crate::queries::dashboard;

/// Drop excluded status buckets, then apply the optional end-date range.
pub fn select_for_export(contracts: &[Contract], options: &ExportOptions) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|c| match c.status {
            ContractStatus::Active => options.include_active,
            ContractStatus::ExpiringSoon => options.include_expiring,
            ContractStatus::Expired => options.include_expired,
        })
        .filter(|c| {
            options
                .date_range
                .map(|range| range.contains(c.end_date))
                .unwrap_or(true)
        })
        .cloned()
        .collect()
}

/// Select, render in `options.format`, and hand the result to `sink`.
///
/// A report (`pdf`) export needs `chart_data`; without it the call fails
/// with [`EngineError::MissingChartData`] and nothing reaches the sink.
pub fn dispatch<S: OutputSink + ?Sized>(
    contracts: &[Contract],
    options: &ExportOptions,
    chart_data: Option<&ChartData>,
    now: DateTime<Utc>,
    sink: &mut S,
) -> Result<ExportOutcome> {
    let selected = select_for_export(contracts, options);

    let file_name = match options.format {
        ExportFormat::Csv => {
            let text = to_csv(&selected);
            sink.write_artifact(text.as_bytes(), config::CSV_FILE_NAME, config::CSV_MIME)?;
            config::CSV_FILE_NAME
        }
        ExportFormat::Json => {
            let text = to_json(&selected, options, now)?;
            sink.write_artifact(text.as_bytes(), config::JSON_FILE_NAME, config::JSON_MIME)?;
            config::JSON_FILE_NAME
        }
        ExportFormat::Pdf => {
            let chart_data = chart_data.ok_or(EngineError::MissingChartData)?;
            let html = to_report(&selected, chart_data, now);
            let ready = sink.present_document(&html)?;
            sink.print(ready)?;
            config::REPORT_FILE_NAME
        }
    };

    info!(format = ?options.format, records = selected.len(), file_name, "export dispatched");
    Ok(ExportOutcome {
        format: options.format,
        file_name: file_name.to_string(),
        records: selected.len(),
    })
}

// ---------------------------------------------------------------------------
// ExportQuery
// ---------------------------------------------------------------------------

/// Export interface over a loaded snapshot.
///
/// Report exports get their chart data computed from the same snapshot.
pub struct ExportQuery<'a> {
    contracts: &'a [Contract],
    now: DateTime<Utc>,
}

impl<'a> ExportQuery<'a> {
    pub fn new(contracts: &'a [Contract], now: DateTime<Utc>) -> Self {
        Self { contracts, now }
    }

    pub fn select(&self, options: &ExportOptions) -> Vec<Contract> {
        select_for_export(self.contracts, options)
    }

    pub fn csv(&self, options: &ExportOptions) -> String {
        to_csv(&self.select(options))
    }

    pub fn json(&self, options: &ExportOptions) -> Result<String> {
        to_json(&self.select(options), options, self.now)
    }

    /// Report HTML with tiles computed from the selected contracts.
    pub fn report(&self, options: &ExportOptions) -> String {
        let selected = self.select(options);
        let chart_data = dashboard::chart_series(&selected, self.now);
        to_report(&selected, &chart_data, self.now)
    }

    pub fn dispatch<S: OutputSink + ?Sized>(
        &self,
        options: &ExportOptions,
        sink: &mut S,
    ) -> Result<ExportOutcome> {
        let selected = select_for_export(self.contracts, options);
        let chart_data = dashboard::chart_series(&selected, self.now);
        dispatch(self.contracts, options, Some(&chart_data), self.now, sink)
    }

    pub fn dispatch_preset<S: OutputSink + ?Sized>(
        &self,
        preset: ExportPreset,
        format: ExportFormat,
        sink: &mut S,
    ) -> Result<ExportOutcome> {
        self.dispatch(&preset.options(format, self.now), sink)
    }
}
