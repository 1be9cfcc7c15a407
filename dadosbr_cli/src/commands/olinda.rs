use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dadosbr_api::types::ExpectationsReport;
use dadosbr_api::{Format, ODataQuery};

use super::Context;
use crate::output::{print_payload, OutputFormat};

/// OData options shared by every Olinda command.
#[derive(Args)]
pub struct ODataArgs {
    /// Maximum number of records ($top)
    #[arg(long)]
    pub top: Option<u32>,

    /// Records to skip ($skip)
    #[arg(long)]
    pub skip: Option<u32>,

    /// OData filter expression, e.g. "Indicador eq 'IPCA'"
    #[arg(long)]
    pub filter: Option<String>,

    /// OData ordering, e.g. "Data desc"
    #[arg(long)]
    pub orderby: Option<String>,

    /// Comma-separated fields to return
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Response format: json, csv, xml or atom
    #[arg(long, default_value = "json")]
    pub format: Format,
}

impl ODataArgs {
    fn to_query(&self) -> ODataQuery {
        let mut query = ODataQuery::default().with_format(self.format);
        if let Some(top) = self.top {
            query = query.with_top(top);
        }
        if let Some(skip) = self.skip {
            query = query.with_skip(skip);
        }
        if let Some(ref filter) = self.filter {
            query = query.with_filter(filter);
        }
        if let Some(ref orderby) = self.orderby {
            query = query.with_orderby(orderby);
        }
        if !self.select.is_empty() {
            let fields: Vec<&str> = self.select.iter().map(String::as_str).collect();
            query = query.with_select(&fields);
        }
        query
    }
}

#[derive(Args)]
pub struct ExpectationsArgs {
    /// Report entity set, e.g. ExpectativasMercadoSelic
    pub report: ExpectationsReport,

    #[command(flatten)]
    pub odata: ODataArgs,
}

pub async fn run_expectations(
    args: &ExpectationsArgs,
    ctx: &Context,
    format: &OutputFormat,
) -> Result<()> {
    let payload = ctx
        .expectations()?
        .report(args.report, &args.odata.to_query())
        .await?;
    print_payload(&payload, format)
}

#[derive(Args)]
pub struct CoinsArgs {
    #[command(flatten)]
    pub odata: ODataArgs,
}

pub async fn run_coins(args: &CoinsArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let payload = ctx.coins()?.annual(&args.odata.to_query()).await?;
    print_payload(&payload, format)
}

#[derive(Args)]
pub struct PtaxArgs {
    #[command(subcommand)]
    pub resource: PtaxCommand,

    #[command(flatten)]
    pub odata: ODataArgs,
}

#[derive(Subcommand)]
pub enum PtaxCommand {
    /// Currencies available for quotation
    Currencies,
    /// Dollar quotation of one day
    DollarDay { date: NaiveDate },
    /// Dollar quotations over a period
    DollarPeriod { start: NaiveDate, end: NaiveDate },
    /// Quotations of one currency on one day
    CurrencyDay { currency: String, date: NaiveDate },
    /// Quotations of one currency over a period
    CurrencyPeriod {
        currency: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Opening or intermediate bulletins of one day
    CurrencyOpening { currency: String, date: NaiveDate },
    /// Closing quotations of one currency over a period
    CurrencyClosing {
        currency: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

pub async fn run_ptax(args: &PtaxArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let client = ctx.ptax()?;
    let query = args.odata.to_query();

    let payload = match &args.resource {
        PtaxCommand::Currencies => client.currencies(&query).await?,
        PtaxCommand::DollarDay { date } => client.dollar_day(*date, &query).await?,
        PtaxCommand::DollarPeriod { start, end } => {
            client.dollar_period(*start, *end, &query).await?
        }
        PtaxCommand::CurrencyDay { currency, date } => {
            client.currency_day(currency, *date, &query).await?
        }
        PtaxCommand::CurrencyPeriod {
            currency,
            start,
            end,
        } => client.currency_period(currency, *start, *end, &query).await?,
        PtaxCommand::CurrencyOpening { currency, date } => {
            client
                .currency_opening_or_intermediate(currency, *date, &query)
                .await?
        }
        PtaxCommand::CurrencyClosing {
            currency,
            start,
            end,
        } => {
            client
                .currency_period_closing(currency, *start, *end, &query)
                .await?
        }
    };

    print_payload(&payload, format)
}
