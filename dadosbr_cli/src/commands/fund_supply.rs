use anyhow::Result;
use clap::{Args, ValueEnum};
use dadosbr_api::Format;

use super::Context;
use crate::output::{print_payload, OutputFormat};

#[derive(Clone, Copy, ValueEnum)]
pub enum FundSupplyListing {
    /// Grants of the year
    Grants,
    Transactions,
    Movements,
    Commitments,
    /// Acts granting the supply
    GrantActs,
}

#[derive(Args)]
pub struct FundSupplyArgs {
    /// Listing to fetch
    #[arg(value_enum)]
    pub listing: FundSupplyListing,

    /// Year of the listing
    pub year: i32,

    /// Response format: json or csv
    #[arg(long, default_value = "json")]
    pub format: Format,
}

pub async fn run(args: &FundSupplyArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let client = ctx.fund_supply()?;
    let (year, fmt) = (args.year, args.format);

    let payload = match args.listing {
        FundSupplyListing::Grants => client.by_year(year, fmt).await?,
        FundSupplyListing::Transactions => client.transactions(year, fmt).await?,
        FundSupplyListing::Movements => client.movements(year, fmt).await?,
        FundSupplyListing::Commitments => client.commitments(year, fmt).await?,
        FundSupplyListing::GrantActs => client.grant_acts(year, fmt).await?,
    };

    print_payload(&payload, format)
}
