use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dadosbr_api::types::{ContractKind, ContractStatus, OutsourcedSituation, ValidityStatus};
use dadosbr_api::{
    CommitmentNoteFilter, CompanyFilter, ContractFilter, Format, PriceRegistrationFilter,
    TenderFilter,
};

use super::Context;
use crate::output::{print_payload, OutputFormat};

#[derive(Args)]
pub struct ProcurementArgs {
    #[command(subcommand)]
    pub command: ProcurementCommand,

    /// Response format: json or csv
    #[arg(long, default_value = "json", global = true)]
    pub format: Format,
}

/// Filters shared by commitment notes, contracts and price registrations.
#[derive(Args)]
pub struct InstrumentArgs {
    /// Supplier name (partial match)
    #[arg(long)]
    pub supplier: Option<String>,
    /// Supplier CNPJ or CPF
    #[arg(long)]
    pub tax_id: Option<String>,
    #[arg(long)]
    pub number: Option<String>,
    #[arg(long)]
    pub year: Option<i32>,
    /// Object description (partial match)
    #[arg(long)]
    pub object: Option<String>,
}

#[derive(Subcommand)]
pub enum ProcurementCommand {
    /// Payments of a contract, price registration or commitment note
    Payments { kind: ContractKind, id: u64 },
    /// Commitments behind one payment
    PaymentCommitments {
        kind: ContractKind,
        id: u64,
        payment_id: u64,
    },
    /// Invoices of one payment
    Invoices {
        kind: ContractKind,
        id: u64,
        payment_id: u64,
    },
    /// Items of one instrument
    Items { kind: ContractKind, id: u64 },
    /// Guarantees of one instrument
    Guarantees { kind: ContractKind, id: u64 },
    /// Outsourced workers
    Outsourced,
    /// Commitment notes
    CommitmentNotes {
        /// VIGENTE or ENCERRADO
        #[arg(long)]
        status: Option<ValidityStatus>,
        #[command(flatten)]
        instrument: InstrumentArgs,
    },
    /// Young apprentices
    Apprentices,
    /// Tenders
    Tenders {
        #[arg(long)]
        number: Option<String>,
        /// Object (partial match)
        #[arg(long)]
        object: Option<String>,
        /// Opening date from (YYYY-MM-DD)
        #[arg(long)]
        opening_from: Option<NaiveDate>,
        /// Opening date to (YYYY-MM-DD)
        #[arg(long)]
        opening_to: Option<NaiveDate>,
    },
    /// Details of one tender
    TenderDetails {
        tender_id: u64,
        /// A single detail
        detail_id: Option<u64>,
    },
    /// Contracted companies
    Companies {
        #[arg(long)]
        status: Option<ValidityStatus>,
        /// Dedicated labor: true or false
        #[arg(long)]
        labor: Option<bool>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        tax_id: Option<String>,
        #[arg(long)]
        page: Option<u32>,
    },
    /// Contracts
    Contracts {
        /// VIGENTE, EM_RENOVACAO or ENCERRADO
        #[arg(long)]
        status: Option<ContractStatus>,
        /// Dedicated labor: true or false
        #[arg(long)]
        labor: Option<bool>,
        /// Sub-species acronym
        #[arg(long)]
        sub_species: Option<String>,
        /// Engineering work: true or false
        #[arg(long)]
        engineering: Option<bool>,
        #[command(flatten)]
        instrument: InstrumentArgs,
    },
    /// Amendments of one contract
    ContractAmendments { contract_id: u64 },
    /// Outsourced workers of one contract
    ContractOutsourced {
        contract_id: u64,
        /// ATIVO, SUBSTITUIDO or TODOS
        #[arg(long)]
        situation: Option<OutsourcedSituation>,
    },
    /// Price registration records
    PriceRegistrations {
        #[arg(long)]
        status: Option<ValidityStatus>,
        /// Engineering work: true or false
        #[arg(long)]
        engineering: Option<bool>,
        #[command(flatten)]
        instrument: InstrumentArgs,
    },
    /// Activations of one price registration
    PriceRegistrationActivations { registration_id: u64 },
}

fn commitment_note_filter(
    status: Option<ValidityStatus>,
    args: &InstrumentArgs,
) -> CommitmentNoteFilter {
    CommitmentNoteFilter {
        status,
        supplier_name: args.supplier.clone(),
        tax_id: args.tax_id.clone(),
        number: args.number.clone(),
        year: args.year,
        object_description: args.object.clone(),
    }
}

pub async fn run(args: &ProcurementArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let client = ctx.procurement()?;
    let fmt = args.format;

    let payload = match &args.command {
        ProcurementCommand::Payments { kind, id } => client.payments(*kind, *id, fmt).await?,
        ProcurementCommand::PaymentCommitments {
            kind,
            id,
            payment_id,
        } => {
            client
                .payment_commitments(*kind, *id, *payment_id, fmt)
                .await?
        }
        ProcurementCommand::Invoices {
            kind,
            id,
            payment_id,
        } => client.invoices(*kind, *id, *payment_id, fmt).await?,
        ProcurementCommand::Items { kind, id } => client.items(*kind, *id, fmt).await?,
        ProcurementCommand::Guarantees { kind, id } => client.guarantees(*kind, *id, fmt).await?,
        ProcurementCommand::Outsourced => client.outsourced(fmt).await?,
        ProcurementCommand::CommitmentNotes { status, instrument } => {
            let filter = commitment_note_filter(*status, instrument);
            client.commitment_notes(&filter, fmt).await?
        }
        ProcurementCommand::Apprentices => client.apprentices(fmt).await?,
        ProcurementCommand::Tenders {
            number,
            object,
            opening_from,
            opening_to,
        } => {
            if let (Some(from), Some(to)) = (opening_from, opening_to) {
                if from > to {
                    bail!("--opening-from {} is after --opening-to {}", from, to);
                }
            }
            let filter = TenderFilter {
                number: number.clone(),
                object: object.clone(),
                opening_from: *opening_from,
                opening_to: *opening_to,
            };
            client.tenders(&filter, fmt).await?
        }
        ProcurementCommand::TenderDetails {
            tender_id,
            detail_id,
        } => client.tender_details(*tender_id, *detail_id, fmt).await?,
        ProcurementCommand::Companies {
            status,
            labor,
            name,
            tax_id,
            page,
        } => {
            let filter = CompanyFilter {
                status: *status,
                labor: *labor,
                name: name.clone(),
                tax_id: tax_id.clone(),
                page: *page,
            };
            client.companies(&filter, fmt).await?
        }
        ProcurementCommand::Contracts {
            status,
            labor,
            sub_species,
            engineering,
            instrument,
        } => {
            let filter = ContractFilter {
                status: *status,
                labor: *labor,
                supplier_name: instrument.supplier.clone(),
                tax_id: instrument.tax_id.clone(),
                number: instrument.number.clone(),
                year: instrument.year,
                sub_species: sub_species.clone(),
                object_description: instrument.object.clone(),
                engineering_work: *engineering,
            };
            client.contracts(&filter, fmt).await?
        }
        ProcurementCommand::ContractAmendments { contract_id } => {
            client.contract_amendments(*contract_id, fmt).await?
        }
        ProcurementCommand::ContractOutsourced {
            contract_id,
            situation,
        } => {
            client
                .contract_outsourced(*contract_id, *situation, fmt)
                .await?
        }
        ProcurementCommand::PriceRegistrations {
            status,
            engineering,
            instrument,
        } => {
            let filter = PriceRegistrationFilter {
                status: *status,
                supplier_name: instrument.supplier.clone(),
                tax_id: instrument.tax_id.clone(),
                number: instrument.number.clone(),
                year: instrument.year,
                object_description: instrument.object.clone(),
                engineering_work: *engineering,
            };
            client.price_registrations(&filter, fmt).await?
        }
        ProcurementCommand::PriceRegistrationActivations { registration_id } => {
            client
                .price_registration_activations(*registration_id, fmt)
                .await?
        }
    };

    print_payload(&payload, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dadosbr_api::Query;

    #[test]
    fn test_commitment_note_filter_from_args() {
        let args = InstrumentArgs {
            supplier: Some("ACME".to_string()),
            tax_id: None,
            number: None,
            year: Some(2024),
            object: None,
        };
        let params = commitment_note_filter(Some(ValidityStatus::Current), &args).params();
        assert_eq!(params.get("status"), Some("VIGENTE"));
        assert_eq!(params.get("nomeFornecedorContains"), Some("ACME"));
        assert_eq!(params.get("anoEquals"), Some("2024"));
        assert!(!params.contains_key("cnpjCpfEquals"));
    }
}
