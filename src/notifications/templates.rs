//! HTML templates for expiry notices.

use chrono::{DateTime, Utc};

use crate::format::{escape_html, format_currency, format_date};
use crate::models::{Contract, EmailNotification, NotificationType};
use crate::status;

const URGENT_COLOR: &str = "#dc2626";
const REMINDER_COLOR: &str = "#d97706";

/// Deep link to the contract detail page.
pub fn contract_link(base_url: &str, contract_id: &str) -> String {
    format!("{}/contracts/{}", base_url.trim_end_matches('/'), contract_id)
}

/// Render the notice for `contract` as of `now`.
///
/// Due today (or later) selects the urgent warning; anything still ahead
/// selects the reminder.
pub fn render(contract: &Contract, now: DateTime<Utc>, base_url: &str) -> EmailNotification {
    let days = status::days_until_expiry(contract.end_date, now);
    let notification_type = if days <= 0 {
        NotificationType::ExpiryWarning
    } else {
        NotificationType::ExpiryReminder
    };

    let (subject, headline, color) = match notification_type {
        NotificationType::ExpiryWarning if days == 0 => (
            format!("URGENTE: Contrato \"{}\" vence hoje", contract.name),
            "VENCE HOJE".to_string(),
            URGENT_COLOR,
        ),
        NotificationType::ExpiryWarning => (
            format!("URGENTE: Contrato \"{}\" está vencido", contract.name),
            "VENCIDO".to_string(),
            URGENT_COLOR,
        ),
        NotificationType::ExpiryReminder => (
            format!(
                "Lembrete: Contrato \"{}\" vence em {} dias",
                contract.name, days
            ),
            format!("VENCE EM {days} DIAS"),
            REMINDER_COLOR,
        ),
    };

    EmailNotification {
        to: contract.responsible_email.clone(),
        subject,
        body: body(contract, &headline, color, base_url),
        contract_id: contract.id.clone(),
        notification_type,
    }
}

fn body(contract: &Contract, headline: &str, color: &str, base_url: &str) -> String {
    let link = contract_link(base_url, &contract.id);
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body style="font-family: Arial, sans-serif; background: #f3f4f6; padding: 24px;">
<div style="max-width: 600px; margin: 0 auto; background: #ffffff; border-radius: 8px; overflow: hidden;">
  <div style="background: {color}; color: #ffffff; padding: 20px; text-align: center;">
    <h1 style="margin: 0; font-size: 22px;">{headline}</h1>
  </div>
  <div style="padding: 24px;">
    <p>Olá, {responsible}.</p>
    <p>O contrato abaixo requer sua atenção:</p>
    <table style="width: 100%; border-collapse: collapse;">
      <tr><td><strong>Contrato</strong></td><td>{title}</td></tr>
      <tr><td><strong>Contratante</strong></td><td>{company}</td></tr>
      <tr><td><strong>Contratado</strong></td><td>{party}</td></tr>
      <tr><td><strong>Vencimento</strong></td><td style="color: {color};">{due}</td></tr>
      <tr><td><strong>Valor</strong></td><td>{value}</td></tr>
      <tr><td><strong>Responsável</strong></td><td>{responsible}</td></tr>
    </table>
    <p style="text-align: center; margin-top: 24px;">
      <a href="{link}" style="background: {color}; color: #ffffff; padding: 12px 24px; border-radius: 6px; text-decoration: none;">Ver contrato</a>
    </p>
  </div>
  <div style="padding: 12px; text-align: center; font-size: 12px; color: #6b7280;">
    Mensagem automática do JuriSync.
  </div>
</div>
</body>
</html>"#,
        title = escape_html(&contract.name),
        headline = headline,
        color = color,
        responsible = escape_html(&contract.internal_responsible),
        company = escape_html(&contract.contracting_company),
        party = escape_html(&contract.contracted_party),
        due = format_date(contract.end_date),
        value = format_currency(contract.value),
        link = escape_html(&link),
    )
}
