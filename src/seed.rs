//! Known-good sample dataset used when no readable store exists.

use crate::error::Result;
use crate::models::Contract;

const SEED_CONTRACTS: &str = r#"[
  {
    "id": "1",
    "name": "Contrato de Prestação de Serviços de TI",
    "contractingCompany": "TechCorp Ltda",
    "contractedParty": "Sistemas Integrados S.A.",
    "startDate": "2024-01-15T00:00:00Z",
    "endDate": "2025-01-15T00:00:00Z",
    "value": 150000,
    "internalResponsible": "Ana Souza",
    "responsibleEmail": "ana.souza@jurisync.com.br",
    "status": "active",
    "file": { "name": "contrato-ti.pdf", "type": "application/pdf", "path": "/uploads/contrato-ti.pdf" },
    "createdAt": "2024-01-10T12:00:00Z",
    "updatedAt": "2024-01-10T12:00:00Z",
    "tags": ["ti", "servicos"],
    "priority": "high",
    "owner": "ana.souza@jurisync.com.br"
  },
  {
    "id": "2",
    "name": "Contrato de Locação Comercial",
    "contractingCompany": "Varejo Brasil S.A.",
    "contractedParty": "Imobiliária Central",
    "startDate": "2023-03-01T00:00:00Z",
    "endDate": "2026-02-28T00:00:00Z",
    "value": 480000,
    "internalResponsible": "Carlos Lima",
    "responsibleEmail": "carlos.lima@jurisync.com.br",
    "status": "active",
    "file": null,
    "createdAt": "2023-02-20T09:30:00Z",
    "updatedAt": "2023-02-20T09:30:00Z",
    "tags": ["imovel"],
    "priority": "medium",
    "owner": null
  },
  {
    "id": "3",
    "name": "Contrato de Consultoria Jurídica",
    "contractingCompany": "TechCorp Ltda",
    "contractedParty": "Mendes & Associados Advocacia",
    "startDate": "2024-02-01T00:00:00Z",
    "endDate": "2024-08-01T00:00:00Z",
    "value": 36000,
    "internalResponsible": "Ana Souza",
    "responsibleEmail": "ana.souza@jurisync.com.br",
    "status": "active",
    "file": null,
    "createdAt": "2024-01-25T14:00:00Z",
    "updatedAt": "2024-01-25T14:00:00Z",
    "tags": ["juridico"],
    "priority": "medium",
    "owner": null
  },
  {
    "id": "4",
    "name": "Contrato de Fornecimento de Materiais",
    "contractingCompany": "Construtora Horizonte",
    "contractedParty": "Distribuidora Norte",
    "startDate": "2023-06-10T00:00:00Z",
    "endDate": "2024-06-10T00:00:00Z",
    "value": 92500.5,
    "internalResponsible": "Beatriz Rocha",
    "responsibleEmail": "beatriz.rocha@jurisync.com.br",
    "status": "active",
    "file": null,
    "createdAt": "2023-06-01T08:00:00Z",
    "updatedAt": "2023-06-01T08:00:00Z",
    "tags": [],
    "priority": "low",
    "owner": null
  },
  {
    "id": "5",
    "name": "Contrato de Manutenção Predial",
    "contractingCompany": "Varejo Brasil S.A.",
    "contractedParty": "Facilities Pro",
    "startDate": "2022-05-01T00:00:00Z",
    "endDate": "2024-05-01T00:00:00Z",
    "value": 60000,
    "internalResponsible": "Carlos Lima",
    "responsibleEmail": "carlos.lima@jurisync.com.br",
    "status": "expired",
    "file": null,
    "createdAt": "2022-04-20T10:00:00Z",
    "updatedAt": "2022-04-20T10:00:00Z",
    "tags": ["manutencao"],
    "priority": "medium",
    "owner": null
  }
]"#;

/// Parse the bundled sample contracts. Cached statuses are as stored; run
/// them through [`crate::status::recompute_all`] before display.
pub fn contracts() -> Result<Vec<Contract>> {
    Ok(serde_json::from_str(SEED_CONTRACTS)?)
}
