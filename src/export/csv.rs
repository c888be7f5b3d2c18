use crate::format::format_date;
use crate::models::Contract;

pub const CSV_HEADER: [&str; 11] = [
    "ID",
    "Nome",
    "Empresa Contratante",
    "Parte Contratada",
    "Data de Início",
    "Data de Término",
    "Valor",
    "Responsável Interno",
    "Email do Responsável",
    "Status",
    "Data de Criação",
];

/// Render contracts as comma-separated text, header first.
///
/// Values stay bare decimals so spreadsheets can parse them; statuses use
/// their human label.
pub fn to_csv(contracts: &[Contract]) -> String {
    let mut lines = Vec::with_capacity(contracts.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for c in contracts {
        let row = [
            c.id.clone(),
            quote(&c.name),
            quote(&c.contracting_company),
            quote(&c.contracted_party),
            format_date(c.start_date),
            format_date(c.end_date),
            c.value.to_string(),
            quote(&c.internal_responsible),
            c.responsible_email.clone(),
            c.status.label().to_string(),
            format_date(c.created_at),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
