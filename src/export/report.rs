//! Self-contained printable HTML report.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::format::{escape_html, format_currency, format_date};
use crate::models::{ChartData, Contract, ContractStatus};

/// Build the print report: summary tiles followed by the full contract table.
///
/// Status counts come from `chart_data` so the report matches the dashboard
/// the user exported from.
pub fn to_report(contracts: &[Contract], chart_data: &ChartData, now: DateTime<Utc>) -> String {
    let total_value: f64 = contracts.iter().map(|c| c.value).sum();

    let tiles = [
        ("Total de Contratos", contracts.len().to_string(), "#1f2937"),
        (
            "Ativos",
            chart_data.count_for(ContractStatus::Active).to_string(),
            ContractStatus::Active.color(),
        ),
        (
            "Vencendo",
            chart_data.count_for(ContractStatus::ExpiringSoon).to_string(),
            ContractStatus::ExpiringSoon.color(),
        ),
        (
            "Vencidos",
            chart_data.count_for(ContractStatus::Expired).to_string(),
            ContractStatus::Expired.color(),
        ),
        ("Valor Total", format_currency(total_value), "#2563eb"),
    ];

    let mut tile_html = String::new();
    for (label, value, color) in &tiles {
        let _ = write!(
            tile_html,
            r#"<div class="tile"><div class="tile-value" style="color: {color};">{value}</div><div class="tile-label">{label}</div></div>"#
        );
    }

    let mut rows = String::new();
    for c in contracts {
        let _ = write!(
            rows,
            r#"<tr><td>{name}</td><td>{company}</td><td>{party}</td><td>{start}</td><td>{end}</td><td class="num">{value}</td><td>{responsible}</td><td><span class="status" style="background: {color};">{status}</span></td></tr>"#,
            name = escape_html(&c.name),
            company = escape_html(&c.contracting_company),
            party = escape_html(&c.contracted_party),
            start = format_date(c.start_date),
            end = format_date(c.end_date),
            value = format_currency(c.value),
            responsible = escape_html(&c.internal_responsible),
            color = c.status.color(),
            status = c.status.label(),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Relatório de Contratos - JuriSync</title>
<style>
  body {{ font-family: Arial, sans-serif; color: #1f2937; margin: 32px; }}
  h1 {{ margin-bottom: 4px; }}
  .generated {{ color: #6b7280; font-size: 12px; margin-bottom: 24px; }}
  .tiles {{ display: flex; gap: 12px; margin-bottom: 24px; }}
  .tile {{ flex: 1; border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; text-align: center; }}
  .tile-value {{ font-size: 20px; font-weight: bold; }}
  .tile-label {{ font-size: 12px; color: #6b7280; }}
  table {{ width: 100%; border-collapse: collapse; font-size: 12px; }}
  th, td {{ border: 1px solid #e5e7eb; padding: 6px 8px; text-align: left; }}
  th {{ background: #f9fafb; }}
  td.num {{ text-align: right; }}
  .status {{ color: #ffffff; border-radius: 4px; padding: 2px 6px; }}
  @media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
<h1>Relatório de Contratos</h1>
<div class="generated">Gerado em {generated}</div>
<div class="tiles">{tile_html}</div>
<table>
<thead><tr><th>Contrato</th><th>Contratante</th><th>Contratado</th><th>Início</th><th>Término</th><th>Valor</th><th>Responsável</th><th>Status</th></tr></thead>
<tbody>{rows}</tbody>
</table>
</body>
</html>"#,
        generated = format_date(now),
    )
}
