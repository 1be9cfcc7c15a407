use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use dadosbr_api::types::{BondType, StaffSituation};
use dadosbr_api::{Format, StaffFilter};

use super::Context;
use crate::output::{print_payload, OutputFormat};

#[derive(Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommand,

    /// Response format: json or csv (some listings are json only)
    #[arg(long, default_value = "json", global = true)]
    pub format: Format,
}

#[derive(Subcommand)]
pub enum StaffCommand {
    /// Staff listing
    List {
        /// EFETIVO, COMISSIONADO, REQUISITADO, PARLAMENTAR or EXERCICIO_PROVISORIO
        #[arg(long)]
        bond: Option<BondType>,
        /// ATIVO, INATIVO, DESLIGADO or APOSENTADO
        #[arg(long)]
        situation: Option<StaffSituation>,
        /// Department acronym
        #[arg(long)]
        department: Option<String>,
        /// Position name
        #[arg(long)]
        position: Option<String>,
    },
    /// Inactive staff
    Inactive,
    /// Permanent staff
    Permanent,
    /// Commissioned staff
    Commissioned,
    /// Active staff
    Active,
    /// Remuneration of one month
    Payroll { year: i32, month: u32 },
    /// Headcount summary
    Headcount,
    /// Headcount of commissioned positions and functions
    PositionsHeadcount,
    /// Expected retirements
    RetirementForecast,
    /// Pensioners
    Pensioners,
    /// Pensioner remuneration of one month
    PensionerPayroll { year: i32, month: u32 },
    /// Departments
    Departments,
    /// Overtime paid in one month
    Overtime { year: i32, month: u32 },
    /// Interns
    Interns,
    /// Positions
    Positions,
}

fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        bail!("month must be between 1 and 12, got {}", month);
    }
    Ok(())
}

pub async fn run(args: &StaffArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let client = ctx.staff()?;
    let fmt = args.format;

    let payload = match &args.command {
        StaffCommand::List {
            bond,
            situation,
            department,
            position,
        } => {
            let mut filter = StaffFilter::default();
            if let Some(bond) = bond {
                filter = filter.with_bond_type(*bond);
            }
            if let Some(situation) = situation {
                filter = filter.with_situation(*situation);
            }
            if let Some(department) = department {
                filter = filter.with_department(department);
            }
            if let Some(position) = position {
                filter = filter.with_position(position);
            }
            client.staff(&filter, fmt).await?
        }
        StaffCommand::Inactive => client.inactive().await?,
        StaffCommand::Permanent => client.permanent().await?,
        StaffCommand::Commissioned => client.commissioned().await?,
        StaffCommand::Active => client.active().await?,
        StaffCommand::Payroll { year, month } => {
            check_month(*month)?;
            client.payroll(*year, *month, fmt).await?
        }
        StaffCommand::Headcount => client.headcount(fmt).await?,
        StaffCommand::PositionsHeadcount => client.positions_headcount(fmt).await?,
        StaffCommand::RetirementForecast => client.retirement_forecast(fmt).await?,
        StaffCommand::Pensioners => client.pensioners(fmt).await?,
        StaffCommand::PensionerPayroll { year, month } => {
            check_month(*month)?;
            client.pensioner_payroll(*year, *month, fmt).await?
        }
        StaffCommand::Departments => client.departments().await?,
        StaffCommand::Overtime { year, month } => {
            check_month(*month)?;
            client.overtime(*year, *month, fmt).await?
        }
        StaffCommand::Interns => client.interns(fmt).await?,
        StaffCommand::Positions => client.positions().await?,
    };

    print_payload(&payload, format)
}
