use crate::cli_args::*;
use crate::modules::shared::parse_payload;
use crate::modules::system::output::{print_deleted, print_json, write_bytes};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_invoice(
    args: InvoiceArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let invoices = ctx.client.invoices();
    match args.command {
        InvoiceCommand::List(args) => print_json(&invoices.list(&args.to_query()).await?)?,
        InvoiceCommand::Get(args) => print_json(&invoices.get(args.id).await?)?,
        InvoiceCommand::Create(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&invoices.create(payload).await?)?;
        }
        InvoiceCommand::Update(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&invoices.update(args.id, payload).await?)?;
        }
        InvoiceCommand::Delete(args) => {
            invoices.delete(args.id).await?;
            print_deleted("Invoice", args.id);
        }
        InvoiceCommand::Upload(args) => {
            if !args.file.is_file() {
                anyhow::bail!("{} is not a file", args.file.display());
            }
            print_json(&invoices.upload_file_with_ocr(&args.file).await?)?;
        }
        InvoiceCommand::Export(args) => {
            let csv = invoices.export(&args.list.to_query()).await?;
            write_bytes(&csv, args.out.as_deref())?;
        }
    }
    Ok(())
}
