use clap::{Args, Subcommand};

use crate::modules::shared::args::{DataArgs, IdArgs, UpdateArgs};

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    List,
    Get(IdArgs),
    Create(DataArgs),
    Update(UpdateArgs),
    Delete(IdArgs),
}
