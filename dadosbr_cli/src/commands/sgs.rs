use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;
use dadosbr_api::types::SeriesCode;
use dadosbr_api::{Format, SgsQuery};

use super::Context;
use crate::output::{print_payload, OutputFormat};

#[derive(Args)]
pub struct SgsArgs {
    /// Series code or name (selic, selic-monthly, selic-annualized,
    /// dollar-sell-daily, dollar-sell-year-end, active-credit-cards)
    pub series: SeriesCode,

    /// First observation date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last observation date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Only the most recent N observations
    #[arg(long)]
    pub last: Option<u32>,

    /// Response format requested from the API: json or csv
    #[arg(long, default_value = "json")]
    pub format: Format,
}

pub async fn run(args: &SgsArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    if let (Some(start), Some(end)) = (args.start, args.end) {
        if start > end {
            bail!("--start {} is after --end {}", start, end);
        }
    }

    let mut query = SgsQuery::new(args.series).with_format(args.format);
    if let Some(start) = args.start {
        query = query.with_start(start);
    }
    if let Some(end) = args.end {
        query = query.with_end(end);
    }
    if let Some(last) = args.last {
        query = query.with_last(last);
    }

    let payload = ctx.sgs()?.series(&query).await?;
    print_payload(&payload, format)
}
