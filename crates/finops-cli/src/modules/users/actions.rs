use crate::cli_args::*;
use crate::modules::shared::parse_payload;
use crate::modules::system::output::{print_deleted, print_json};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_user(args: UserArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let users = ctx.client.users();
    match args.command {
        UserCommand::List(args) => print_json(&users.list(&args.to_query()).await?)?,
        UserCommand::Get(args) => print_json(&users.get(args.id).await?)?,
        UserCommand::Update(args) => {
            let payload = parse_payload(&args.data)?;
            print_json(&users.update(args.id, payload).await?)?;
        }
        UserCommand::Delete(args) => {
            users.delete(args.id).await?;
            print_deleted("User", args.id);
        }
    }
    Ok(())
}
