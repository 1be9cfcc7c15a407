use std::str::FromStr;

use crate::Error;

fn unknown(kind: &'static str, value: &str) -> Error {
    Error::UnknownVariant {
        kind,
        value: value.to_string(),
    }
}

/// Employment bond of a Senate staff member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BondType {
    ProvisionalExercise,
    Commissioned,
    Requisitioned,
    Parliamentary,
    Permanent,
}

impl std::fmt::Display for BondType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BondType::ProvisionalExercise => "EXERCICIO_PROVISORIO",
                BondType::Commissioned => "COMISSIONADO",
                BondType::Requisitioned => "REQUISITADO",
                BondType::Parliamentary => "PARLAMENTAR",
                BondType::Permanent => "EFETIVO",
            }
        )
    }
}

impl FromStr for BondType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EXERCICIO_PROVISORIO" => Ok(BondType::ProvisionalExercise),
            "COMISSIONADO" => Ok(BondType::Commissioned),
            "REQUISITADO" => Ok(BondType::Requisitioned),
            "PARLAMENTAR" => Ok(BondType::Parliamentary),
            "EFETIVO" => Ok(BondType::Permanent),
            _ => Err(unknown("bond type", s)),
        }
    }
}

/// Status of a Senate staff member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StaffSituation {
    Active,
    Inactive,
    Dismissed,
    Retired,
}

impl std::fmt::Display for StaffSituation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StaffSituation::Active => "ATIVO",
                StaffSituation::Inactive => "INATIVO",
                StaffSituation::Dismissed => "DESLIGADO",
                StaffSituation::Retired => "APOSENTADO",
            }
        )
    }
}

impl FromStr for StaffSituation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ATIVO" => Ok(StaffSituation::Active),
            "INATIVO" => Ok(StaffSituation::Inactive),
            "DESLIGADO" => Ok(StaffSituation::Dismissed),
            "APOSENTADO" => Ok(StaffSituation::Retired),
            _ => Err(unknown("staff situation", s)),
        }
    }
}

/// Kind of procurement instrument, embedded in contracting paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Contracts,
    PriceRegistrations,
    CommitmentNotes,
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ContractKind::Contracts => "contratos",
                ContractKind::PriceRegistrations => "atas_registro_preco",
                ContractKind::CommitmentNotes => "notas_empenho",
            }
        )
    }
}

impl FromStr for ContractKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contratos" => Ok(ContractKind::Contracts),
            "atas_registro_preco" => Ok(ContractKind::PriceRegistrations),
            "notas_empenho" => Ok(ContractKind::CommitmentNotes),
            _ => Err(unknown("contract kind", s)),
        }
    }
}

/// Validity of commitment notes, companies and price registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidityStatus {
    Current,
    Closed,
}

impl std::fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ValidityStatus::Current => "VIGENTE",
                ValidityStatus::Closed => "ENCERRADO",
            }
        )
    }
}

impl FromStr for ValidityStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VIGENTE" => Ok(ValidityStatus::Current),
            "ENCERRADO" => Ok(ValidityStatus::Closed),
            _ => Err(unknown("status", s)),
        }
    }
}

/// Contract status, which adds a renewal state to [`ValidityStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractStatus {
    Current,
    UnderRenewal,
    Closed,
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ContractStatus::Current => "VIGENTE",
                ContractStatus::UnderRenewal => "EM_RENOVACAO",
                ContractStatus::Closed => "ENCERRADO",
            }
        )
    }
}

impl FromStr for ContractStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VIGENTE" => Ok(ContractStatus::Current),
            "EM_RENOVACAO" => Ok(ContractStatus::UnderRenewal),
            "ENCERRADO" => Ok(ContractStatus::Closed),
            _ => Err(unknown("contract status", s)),
        }
    }
}

/// Which outsourced workers of a contract to list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutsourcedSituation {
    Active,
    Replaced,
    All,
}

impl std::fmt::Display for OutsourcedSituation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutsourcedSituation::Active => "ATIVO",
                OutsourcedSituation::Replaced => "SUBSTITUIDO",
                OutsourcedSituation::All => "TODOS",
            }
        )
    }
}

impl FromStr for OutsourcedSituation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ATIVO" => Ok(OutsourcedSituation::Active),
            "SUBSTITUIDO" => Ok(OutsourcedSituation::Replaced),
            "TODOS" => Ok(OutsourcedSituation::All),
            _ => Err(unknown("outsourced situation", s)),
        }
    }
}

/// Static budget reports published by the Senate finance office.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FinancialReport {
    /// Initial and final budget allocation, committed, liquidated and paid expenses.
    Expenses,
    /// Forecast and collected own revenues.
    Revenues,
}

impl FinancialReport {
    /// File served for the JSON variant.
    pub fn json_file(&self) -> &'static str {
        match self {
            FinancialReport::Expenses => "DespesaSenadoDadosAbertos.json",
            FinancialReport::Revenues => "ReceitasSenadoDadosAbertos.json",
        }
    }

    /// File served for the CSV variant.
    pub fn csv_file(&self) -> &'static str {
        match self {
            FinancialReport::Expenses => "DespesaSenado.csv",
            FinancialReport::Revenues => "ReceitasSenado.csv",
        }
    }
}

impl std::fmt::Display for FinancialReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FinancialReport::Expenses => "despesas",
                FinancialReport::Revenues => "receitas",
            }
        )
    }
}

impl FromStr for FinancialReport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "despesas" | "expenses" => Ok(FinancialReport::Expenses),
            "receitas" | "revenues" => Ok(FinancialReport::Revenues),
            _ => Err(unknown("financial report", s)),
        }
    }
}
