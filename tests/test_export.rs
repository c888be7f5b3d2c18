//! Export selection, CSV/JSON/report producers and sink dispatch tests.

mod common;

use chrono::Duration;
use jurisync_engine::export::{
    dispatch, select_for_export, to_csv, to_json, to_report, DirectorySink, ExportQuery,
    MemorySink, OutputSink, RenderReady,
};
use jurisync_engine::format::{format_currency, format_date};
use jurisync_engine::models::{DateRange, ExportFormat, ExportOptions, ExportPreset};
use jurisync_engine::queries::dashboard::chart_series;
use jurisync_engine::{config, ContractStatus, EngineError};

fn two_contracts() -> Vec<jurisync_engine::Contract> {
    common::sample_contracts().into_iter().take(2).collect()
}

// ---------------------------------------------------------------------------
// select_for_export
// ---------------------------------------------------------------------------

#[test]
fn default_options_include_everything() {
    let contracts = common::sample_contracts();
    let selected = select_for_export(&contracts, &ExportOptions::default());
    assert_eq!(selected, contracts);
}

#[test]
fn disabled_status_bucket_is_removed() {
    let contracts = common::sample_contracts();
    let options = ExportOptions {
        include_expired: false,
        include_expiring: false,
        ..ExportOptions::default()
    };
    let selected = select_for_export(&contracts, &options);
    assert_eq!(common::ids(&selected), vec!["active", "june"]);
}

#[test]
fn date_range_is_inclusive_on_end_date() {
    let contracts = common::sample_contracts();
    let options = ExportOptions {
        date_range: Some(DateRange {
            start: common::at(2024, 6, 1),
            end: common::at(2024, 6, 8),
        }),
        ..ExportOptions::default()
    };
    let selected = select_for_export(&contracts, &options);
    assert_eq!(common::ids(&selected), vec!["seven", "today", "six"]);
}

#[test]
fn status_and_range_combine() {
    let contracts = common::sample_contracts();
    let options = ExportOptions {
        include_active: false,
        date_range: Some(DateRange {
            start: common::at(2024, 5, 1),
            end: common::at(2024, 6, 30),
        }),
        ..ExportOptions::default()
    };
    let selected = select_for_export(&contracts, &options);
    assert_eq!(common::ids(&selected), vec!["seven", "today", "six", "expired"]);
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[test]
fn csv_has_header_plus_one_line_per_contract() {
    let csv = to_csv(&two_contracts());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split(',').count(), 11);
    assert!(lines[0].starts_with("ID,Nome,Empresa Contratante"));
}

#[test]
fn csv_values_are_bare_numbers() {
    let csv = to_csv(&two_contracts());
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].contains(",150000,"));
    assert!(lines[2].contains(",48000,"));
    assert!(!csv.contains("R$"));
}

#[test]
fn csv_quotes_free_text_and_uses_labels() {
    let csv = to_csv(&two_contracts());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[2],
        "seven,\"Contrato de Locação, Sala 12\",\"Varejo Brasil S.A.\",\"Parte seven\",\
         01/03/2024,08/06/2024,48000,\"Carlos Lima\",carlos.lima@jurisync.com.br,Vencendo,01/03/2024"
    );
}

#[test]
fn csv_doubles_embedded_quotes() {
    let mut contracts = two_contracts();
    contracts[0].name = "Contrato \"Master\"".into();
    let csv = to_csv(&contracts);
    assert!(csv.contains("\"Contrato \"\"Master\"\"\""));
}

#[test]
fn csv_of_nothing_is_just_the_header() {
    let csv = to_csv(&[]);
    assert_eq!(csv.lines().count(), 1);
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn json_envelope_counts_selected_records() {
    let contracts = common::sample_contracts();
    let options = ExportOptions {
        format: ExportFormat::Json,
        include_active: false,
        ..ExportOptions::default()
    };
    let selected = select_for_export(&contracts, &options);
    let text = to_json(&selected, &options, common::now()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["metadata"]["totalRecords"], 4);
    assert_eq!(value["contracts"].as_array().unwrap().len(), 4);
    assert_eq!(value["metadata"]["options"]["includeActive"], false);
    assert_eq!(value["metadata"]["options"]["format"], "json");
    assert!(value["metadata"]["exportDate"]
        .as_str()
        .unwrap()
        .starts_with("2024-06-01T00:00:00"));
}

#[test]
fn json_uses_machine_status_and_iso_dates() {
    let text = to_json(&two_contracts(), &ExportOptions::default(), common::now()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let seven = &value["contracts"][1];

    assert_eq!(seven["status"], "expiring_soon");
    assert_eq!(seven["value"], 48000.0);
    assert!(seven["endDate"].as_str().unwrap().starts_with("2024-06-08T00:00:00"));
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[test]
fn report_has_summary_tiles_and_table() {
    let contracts = common::sample_contracts();
    let chart = chart_series(&contracts, common::now());
    let html = to_report(&contracts, &chart, common::now());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Total de Contratos"));
    assert!(html.contains(&format_currency(315_250.5)));
    assert!(html.contains("R$ 315.250,50"));
    assert_eq!(html.matches("<tr><td>").count(), contracts.len());
    assert!(html.contains(ContractStatus::Expired.label()));
    assert!(html.contains(&format_date(common::now())));
}

// ---------------------------------------------------------------------------
// dispatch
// ---------------------------------------------------------------------------

#[test]
fn dispatch_csv_writes_artifact() {
    let contracts = common::sample_contracts();
    let mut sink = MemorySink::new();
    let outcome = dispatch(
        &contracts,
        &ExportOptions::new(ExportFormat::Csv),
        None,
        common::now(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(outcome.records, 6);
    assert_eq!(outcome.file_name, config::CSV_FILE_NAME);
    assert_eq!(sink.artifacts.len(), 1);
    assert_eq!(sink.artifacts[0].file_name, "contratos-jurisync.csv");
    assert_eq!(sink.artifacts[0].mime, "text/csv");
    assert!(sink.documents.is_empty());
}

#[test]
fn dispatch_json_applies_selection() {
    let contracts = common::sample_contracts();
    let mut sink = MemorySink::new();
    let options = ExportOptions {
        include_expired: false,
        ..ExportOptions::new(ExportFormat::Json)
    };
    let outcome = dispatch(&contracts, &options, None, common::now(), &mut sink).unwrap();

    assert_eq!(outcome.records, 5);
    assert_eq!(sink.artifacts[0].file_name, "contratos-jurisync.json");
    assert_eq!(sink.artifacts[0].mime, "application/json");
    let value: serde_json::Value = serde_json::from_slice(&sink.artifacts[0].bytes).unwrap();
    assert_eq!(value["metadata"]["totalRecords"], 5);
}

#[test]
fn dispatch_report_without_chart_data_is_an_error() {
    let contracts = common::sample_contracts();
    let mut sink = MemorySink::new();
    let result = dispatch(
        &contracts,
        &ExportOptions::new(ExportFormat::Pdf),
        None,
        common::now(),
        &mut sink,
    );

    assert!(matches!(result, Err(EngineError::MissingChartData)));
    assert!(sink.documents.is_empty());
    assert!(sink.printed.is_empty());
}

#[test]
fn dispatch_report_prints_after_ready_signal() {
    let contracts = common::sample_contracts();
    let chart = chart_series(&contracts, common::now());
    let mut sink = MemorySink::new();
    let outcome = dispatch(
        &contracts,
        &ExportOptions::new(ExportFormat::Pdf),
        Some(&chart),
        common::now(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(outcome.format, ExportFormat::Pdf);
    assert_eq!(sink.documents.len(), 1);
    assert_eq!(sink.printed, vec![0]);
    assert!(sink.artifacts.is_empty());
}

#[test]
fn sinks_reject_tokens_for_unpresented_documents() {
    let mut memory = MemorySink::new();
    let result = memory.print(RenderReady::new(0));
    assert!(matches!(result, Err(EngineError::Output(_))));
    assert!(memory.printed.is_empty());

    let tmp = tempfile::tempdir().unwrap();
    let mut directory = DirectorySink::new(tmp.path()).unwrap();
    let ready = directory.present_document("<p>relatório</p>").unwrap();
    assert_eq!(ready.document_id(), 0);
    let result = directory.print(RenderReady::new(1));
    assert!(matches!(result, Err(EngineError::Output(_))));
    directory.print(ready).unwrap();
    assert_eq!(directory.printed().len(), 1);
}

#[test]
fn directory_sink_writes_files() {
    let tmp = tempfile::tempdir().unwrap();
    let contracts = common::sample_contracts();
    let mut sink = DirectorySink::new(tmp.path().join("exports")).unwrap();

    dispatch(&contracts, &ExportOptions::new(ExportFormat::Csv), None, common::now(), &mut sink)
        .unwrap();
    let csv = std::fs::read_to_string(sink.dir().join(config::CSV_FILE_NAME)).unwrap();
    assert_eq!(csv.lines().count(), 7);

    let chart = chart_series(&contracts, common::now());
    dispatch(
        &contracts,
        &ExportOptions::new(ExportFormat::Pdf),
        Some(&chart),
        common::now(),
        &mut sink,
    )
    .unwrap();
    let report = sink.dir().join(config::REPORT_FILE_NAME);
    assert!(report.exists());
    assert_eq!(sink.printed(), &[report]);
}

// ---------------------------------------------------------------------------
// Presets and ExportQuery
// ---------------------------------------------------------------------------

#[test]
fn presets_prefill_status_toggles() {
    let now = common::now();
    let active = ExportPreset::ActiveOnly.options(ExportFormat::Csv, now);
    assert!(active.include_active && !active.include_expiring && !active.include_expired);

    let expired = ExportPreset::ExpiredOnly.options(ExportFormat::Json, now);
    assert_eq!(expired.format, ExportFormat::Json);
    assert!(!expired.include_active && !expired.include_expiring && expired.include_expired);

    let all = ExportPreset::AllContracts.options(ExportFormat::Csv, now);
    assert_eq!(all, ExportOptions::default());
}

#[test]
fn month_preset_covers_whole_current_month() {
    let options = ExportPreset::ExpiringThisMonth.options(ExportFormat::Csv, common::now());
    let range = options.date_range.unwrap();
    assert_eq!(range.start, common::at(2024, 6, 1));
    assert_eq!(range.end, common::at(2024, 7, 1) - Duration::milliseconds(1));

    let selected = select_for_export(&common::sample_contracts(), &options);
    assert_eq!(common::ids(&selected), vec!["seven", "today", "six", "june"]);
}

#[test]
fn every_preset_has_a_label() {
    for preset in ExportPreset::ALL {
        assert!(!preset.label().is_empty());
    }
}

#[test]
fn export_query_report_dispatch_supplies_chart_data() {
    let contracts = common::sample_contracts();
    let q = ExportQuery::new(&contracts, common::now());
    let mut sink = MemorySink::new();

    let outcome = q
        .dispatch_preset(ExportPreset::ExpiringSoon, ExportFormat::Pdf, &mut sink)
        .unwrap();
    assert_eq!(outcome.records, 3);
    assert_eq!(sink.printed, vec![0]);
    assert!(sink.documents[0].contains("Fornecimento de Materiais"));
    assert!(!sink.documents[0].contains("Manutenção Predial"));
}

#[test]
fn export_query_text_producers() {
    let contracts = common::sample_contracts();
    let q = ExportQuery::new(&contracts, common::now());
    let options = ExportPreset::ExpiredOnly.options(ExportFormat::Csv, common::now());

    assert_eq!(q.select(&options).len(), 1);
    assert_eq!(q.csv(&options).lines().count(), 2);
    assert!(q.json(&options).unwrap().contains("\"totalRecords\": 1"));
    assert!(q.report(&options).contains("Manutenção Predial"));
}
