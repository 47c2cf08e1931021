use clap::{Args, Subcommand};

use crate::modules::shared::args::{DataArgs, IdArgs, ListArgs, UpdateArgs};

#[derive(Args)]
pub struct TransactionArgs {
    #[command(subcommand)]
    pub command: TransactionCommand,
}

#[derive(Subcommand)]
pub enum TransactionCommand {
    List(ListArgs),
    Get(IdArgs),
    Create(DataArgs),
    Update(UpdateArgs),
    Delete(IdArgs),
    #[command(about = "Match a bank transaction with an invoice")]
    Reconcile(ReconcileArgs),
}

#[derive(Args)]
pub struct ReconcileArgs {
    #[arg(long = "transaction")]
    pub transaction_id: i64,
    #[arg(long = "invoice")]
    pub invoice_id: i64,
}
