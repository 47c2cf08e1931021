use crate::cli_args::*;
use crate::modules::shared::parse_payload;
use crate::modules::system::output::{print_deleted, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_account(
    args: AccountArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let accounts = ctx.client.bank_accounts();
    match args.command {
        AccountCommand::List => print_json(&accounts.list().await?)?,
        AccountCommand::Get(args) => print_json(&accounts.get(args.id).await?)?,
        AccountCommand::Create(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&accounts.create(payload).await?)?;
        }
        AccountCommand::Update(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&accounts.update(args.id, payload).await?)?;
        }
        AccountCommand::Delete(args) => {
            accounts.delete(args.id).await?;
            print_deleted("Bank account", args.id);
        }
    }
    Ok(())
}
