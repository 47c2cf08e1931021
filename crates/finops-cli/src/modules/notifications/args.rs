use clap::{Args, Subcommand};

use crate::modules::shared::args::IdArgs;

#[derive(Args)]
pub struct NotificationArgs {
    #[command(subcommand)]
    pub command: NotificationCommand,
}

#[derive(Subcommand)]
pub enum NotificationCommand {
    List,
    #[command(about = "Mark one notification as read")]
    Read(IdArgs),
    #[command(about = "Mark every notification as read")]
    ReadAll,
}
