use crate::cli_args::*;
use crate::modules::system::output::print_json;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_notification(
    args: NotificationArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let notifications = ctx.client.notifications();
    let response = match args.command {
        NotificationCommand::List => notifications.list().await?,
        NotificationCommand::Read(args) => notifications.mark_as_read(args.id).await?,
        NotificationCommand::ReadAll => notifications.mark_all_as_read().await?,
    };
    print_json(&response)
}
