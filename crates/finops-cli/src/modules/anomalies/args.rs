use clap::{Args, Subcommand};

use crate::modules::shared::args::{IdArgs, ListArgs, UpdateArgs};

#[derive(Args)]
pub struct AnomalyArgs {
    #[command(subcommand)]
    pub command: AnomalyCommand,
}

#[derive(Subcommand)]
pub enum AnomalyCommand {
    List(ListArgs),
    Get(IdArgs),
    Update(UpdateArgs),
    Resolve(IdArgs),
    FalsePositive(IdArgs),
}
