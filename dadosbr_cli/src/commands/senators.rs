use anyhow::Result;
use clap::{Args, Subcommand};
use dadosbr_api::{Format, HousingAllowanceFilter};

use super::Context;
use crate::output::{print_payload, OutputFormat};

#[derive(Args)]
pub struct SenatorsArgs {
    #[command(subcommand)]
    pub command: SenatorsCommand,

    /// Response format: json or csv
    #[arg(long, default_value = "json", global = true)]
    pub format: Format,
}

#[derive(Subcommand)]
pub enum SenatorsCommand {
    /// Number of senators in office
    Headcount,
    /// Senators' offices in their home states
    Offices,
    /// CEAPS parliamentary quota expenses of one year
    Ceaps { year: i32 },
    /// Housing allowance paid to senators
    HousingAllowance {
        /// Senator name (partial match)
        #[arg(long)]
        name: Option<String>,
        /// State the senator was elected in, e.g. SP
        #[arg(long)]
        state: Option<String>,
        /// Party acronym
        #[arg(long)]
        party: Option<String>,
    },
    /// Retired former senators
    Retirees,
}

pub async fn run(args: &SenatorsArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let client = ctx.senators()?;
    let fmt = args.format;

    let payload = match &args.command {
        SenatorsCommand::Headcount => client.headcount(fmt).await?,
        SenatorsCommand::Offices => client.offices(fmt).await?,
        SenatorsCommand::Ceaps { year } => client.ceaps_expenses(*year, fmt).await?,
        SenatorsCommand::HousingAllowance { name, state, party } => {
            let mut filter = HousingAllowanceFilter::default();
            if let Some(name) = name {
                filter = filter.with_name(name);
            }
            if let Some(state) = state {
                filter = filter.with_state(&state.to_uppercase());
            }
            if let Some(party) = party {
                filter = filter.with_party(party);
            }
            client.housing_allowance(&filter, fmt).await?
        }
        SenatorsCommand::Retirees => client.retirees(fmt).await?,
    };

    print_payload(&payload, format)
}
