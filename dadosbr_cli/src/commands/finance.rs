use anyhow::Result;
use clap::Args;
use dadosbr_api::types::FinancialReport;
use dadosbr_api::Format;

use super::Context;
use crate::output::{print_payload, OutputFormat};

#[derive(Args)]
pub struct FinanceArgs {
    /// Report: despesas (expenses) or receitas (revenues)
    pub report: FinancialReport,

    /// File format: json or csv
    #[arg(long, default_value = "json")]
    pub format: Format,
}

pub async fn run(args: &FinanceArgs, ctx: &Context, format: &OutputFormat) -> Result<()> {
    let payload = ctx.finance()?.report(args.report, args.format).await?;
    print_payload(&payload, format)
}
