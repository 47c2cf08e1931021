use crate::cli_args::*;
use crate::modules::accounts::handle_account;
use crate::modules::anomalies::handle_anomaly;
use crate::modules::auth::handle_whoami;
use crate::modules::invoices::handle_invoice;
use crate::modules::notifications::handle_notification;
use crate::modules::reports::handle_report;
use crate::modules::system::CommandContext;
use crate::modules::transactions::handle_transaction;
use crate::modules::users::handle_user;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Whoami => handle_whoami(ctx).await?,
        Command::User(args) => handle_user(args, ctx).await?,
        Command::Invoice(args) => handle_invoice(args, ctx).await?,
        Command::Transaction(args) => handle_transaction(args, ctx).await?,
        Command::Account(args) => handle_account(args, ctx).await?,
        Command::Report(args) => handle_report(args, ctx).await?,
        Command::Notification(args) => handle_notification(args, ctx).await?,
        Command::Anomaly(args) => handle_anomaly(args, ctx).await?,
        Command::Config(_) | Command::Login(_) | Command::Register(_) | Command::Logout => {
            unreachable!()
        }
    }

    Ok(())
}
