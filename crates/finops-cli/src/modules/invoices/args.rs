use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::modules::shared::args::{DataArgs, IdArgs, ListArgs, UpdateArgs};

#[derive(Args)]
pub struct InvoiceArgs {
    #[command(subcommand)]
    pub command: InvoiceCommand,
}

#[derive(Subcommand)]
pub enum InvoiceCommand {
    List(ListArgs),
    Get(IdArgs),
    Create(DataArgs),
    Update(UpdateArgs),
    Delete(IdArgs),
    #[command(about = "Upload a scanned invoice for OCR extraction")]
    Upload(InvoiceUploadArgs),
    #[command(about = "Export invoices as CSV")]
    Export(InvoiceExportArgs),
}

#[derive(Args)]
pub struct InvoiceUploadArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct InvoiceExportArgs {
    #[command(flatten)]
    pub list: ListArgs,
    #[arg(long, help = "Write the CSV here instead of stdout")]
    pub out: Option<PathBuf>,
}
