use clap::{Args, Subcommand};

use crate::modules::shared::args::{IdArgs, ListArgs, UpdateArgs};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand)]
pub enum UserCommand {
    List(ListArgs),
    Get(IdArgs),
    Update(UpdateArgs),
    Delete(IdArgs),
}
