mod commands;
mod output;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dadosbr_api::ClientConfig;

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "dadosbr")]
#[command(about = "Query Brazilian central bank and Federal Senate open data")]
struct Cli {
    /// Output format for JSON payloads: table, json, csv or raw
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an SGS time series
    Sgs(commands::sgs::SgsArgs),
    /// Fetch a Focus market-expectations report
    Expectations(commands::olinda::ExpectationsArgs),
    /// Fetch annual coin emission data
    Coins(commands::olinda::CoinsArgs),
    /// Fetch PTAX exchange-rate quotations
    Ptax(commands::olinda::PtaxArgs),
    /// Senators' headcount, offices and allowances
    Senators(commands::senators::SenatorsArgs),
    /// Senate staff, payroll and pensioners
    Staff(commands::staff::StaffArgs),
    /// Supply of funds granted to Senate staff
    FundSupply(commands::fund_supply::FundSupplyArgs),
    /// Contracts, tenders and price registrations
    Procurement(commands::procurement::ProcurementArgs),
    /// Budget expense and revenue reports
    Finance(commands::finance::FinanceArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dadosbr=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "table" => OutputFormat::Table,
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "raw" => OutputFormat::Raw,
        other => bail!("unknown output format '{}': expected table, json, csv or raw", other),
    };

    let mut config = ClientConfig::default();
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let ctx = Context::from_env(config);

    match &cli.command {
        Commands::Sgs(args) => commands::sgs::run(args, &ctx, &format).await?,
        Commands::Expectations(args) => {
            commands::olinda::run_expectations(args, &ctx, &format).await?
        }
        Commands::Coins(args) => commands::olinda::run_coins(args, &ctx, &format).await?,
        Commands::Ptax(args) => commands::olinda::run_ptax(args, &ctx, &format).await?,
        Commands::Senators(args) => commands::senators::run(args, &ctx, &format).await?,
        Commands::Staff(args) => commands::staff::run(args, &ctx, &format).await?,
        Commands::FundSupply(args) => commands::fund_supply::run(args, &ctx, &format).await?,
        Commands::Procurement(args) => commands::procurement::run(args, &ctx, &format).await?,
        Commands::Finance(args) => commands::finance::run(args, &ctx, &format).await?,
    }

    Ok(())
}
