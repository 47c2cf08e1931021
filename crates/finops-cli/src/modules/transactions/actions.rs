use crate::cli_args::*;
use crate::modules::shared::parse_payload;
use crate::modules::system::output::{print_deleted, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_transaction(
    args: TransactionArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let transactions = ctx.client.transactions();
    match args.command {
        TransactionCommand::List(args) => {
            print_json(&transactions.list(&args.to_query()).await?)?;
        }
        TransactionCommand::Get(args) => print_json(&transactions.get(args.id).await?)?,
        TransactionCommand::Create(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&transactions.create(payload).await?)?;
        }
        TransactionCommand::Update(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&transactions.update(args.id, payload).await?)?;
        }
        TransactionCommand::Delete(args) => {
            transactions.delete(args.id).await?;
            print_deleted("Transaction", args.id);
        }
        TransactionCommand::Reconcile(args) => {
            let response = transactions
                .reconcile_with_invoice(args.transaction_id, args.invoice_id)
                .await?;
            print_json(&response)?;
        }
    }
    Ok(())
}
