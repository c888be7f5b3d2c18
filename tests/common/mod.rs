//! Shared test fixtures for the contract engine integration tests.
//!
//! Every scenario is evaluated at the fixed reference instant [`now()`]
//! (2024-06-01T00:00:00Z) so day arithmetic is deterministic.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use jurisync_engine::status;
use jurisync_engine::Contract;

/// Reference instant for all fixtures.
pub fn now() -> DateTime<Utc> {
    at(2024, 6, 1)
}

/// Midnight UTC on the given date.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Build a contract with parties and a responsible filled in.
pub fn contract(
    id: &str,
    name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    value: f64,
    company: &str,
    responsible: &str,
) -> Contract {
    let email = format!(
        "{}@jurisync.com.br",
        responsible.to_lowercase().replace(' ', ".")
    );
    Contract::new(id, name, start, end, value)
        .with_parties(company, format!("Parte {id}"))
        .with_responsible(responsible, email)
}

/// Six contracts covering every status and both notification offsets,
/// with statuses already classified against [`now()`].
///
/// | id         | end        | days | status        | due |
/// |------------|------------|------|---------------|-----|
/// | active     | 2024-12-31 | 213  | active        | no  |
/// | seven      | 2024-06-08 | 7    | expiring_soon | yes |
/// | today      | 2024-06-01 | 0    | expiring_soon | yes |
/// | six        | 2024-06-07 | 6    | expiring_soon | no  |
/// | expired    | 2024-05-31 | -1   | expired       | no  |
/// | june       | 2024-06-20 | 19   | active        | no  |
pub fn sample_contracts() -> Vec<Contract> {
    let contracts = vec![
        contract(
            "active",
            "Contrato de Prestação de Serviços de TI",
            at(2024, 1, 15),
            at(2024, 12, 31),
            150000.0,
            "TechCorp Ltda",
            "Ana Souza",
        ),
        contract(
            "seven",
            "Contrato de Locação, Sala 12",
            at(2024, 3, 1),
            at(2024, 6, 8),
            48000.0,
            "Varejo Brasil S.A.",
            "Carlos Lima",
        ),
        contract(
            "today",
            "Consultoria Jurídica",
            at(2023, 6, 1),
            at(2024, 6, 1),
            36000.0,
            "TechCorp Ltda",
            "Ana Souza",
        ),
        contract(
            "six",
            "Fornecimento de Materiais",
            at(2024, 5, 10),
            at(2024, 6, 7),
            9250.5,
            "Construtora Horizonte",
            "Beatriz Rocha",
        ),
        contract(
            "expired",
            "Manutenção Predial",
            at(2022, 5, 1),
            at(2024, 5, 31),
            60000.0,
            "Varejo Brasil S.A.",
            "Carlos Lima",
        ),
        contract(
            "june",
            "Licenciamento de Software",
            at(2023, 12, 20),
            at(2024, 6, 20),
            12000.0,
            "TechCorp Ltda",
            "Beatriz Rocha",
        ),
    ];
    status::recompute_all(contracts, now())
}

pub fn ids(contracts: &[Contract]) -> Vec<&str> {
    contracts.iter().map(|c| c.id.as_str()).collect()
}
