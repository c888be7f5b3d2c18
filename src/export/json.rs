use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Contract, ExportOptions};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportMetadata<'a> {
    export_date: DateTime<Utc>,
    total_records: usize,
    options: &'a ExportOptions,
}

#[derive(Debug, Serialize)]
struct ExportEnvelope<'a> {
    metadata: ExportMetadata<'a>,
    contracts: &'a [Contract],
}

/// Wrap contracts in a metadata envelope.
///
/// Timestamps are ISO-8601 and statuses are machine codes.
pub fn to_json(
    contracts: &[Contract],
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> Result<String> {
    let envelope = ExportEnvelope {
        metadata: ExportMetadata {
            export_date: now,
            total_records: contracts.len(),
            options,
        },
        contracts,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}
