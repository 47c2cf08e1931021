use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::modules::shared::args::{DataArgs, IdArgs, ListArgs};

#[derive(Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: ReportCommand,
}

#[derive(Subcommand)]
pub enum ReportCommand {
    List(ListArgs),
    Get(IdArgs),
    Create(DataArgs),
    Delete(IdArgs),
    #[command(about = "Generate an income statement for a date range")]
    IncomeStatement(IncomeStatementArgs),
}

#[derive(Args)]
pub struct IncomeStatementArgs {
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: NaiveDate,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end: NaiveDate,
}
