use clap::{Args, Subcommand};

pub use super::types::SessionBackend;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Persist defaults used when no flag or env var is given")]
    Set(ConfigSetArgs),
    #[command(about = "Print the stored configuration")]
    Show,
    #[command(about = "Forget all stored defaults")]
    Reset,
}

#[derive(Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "Backend base URL (e.g. https://books.example/api)")]
    pub api_url: Option<String>,
    #[arg(long, value_enum)]
    pub session: Option<SessionBackend>,
}
