use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::accounts::args::*;
pub use crate::modules::anomalies::args::*;
pub use crate::modules::auth::args::*;
pub use crate::modules::invoices::args::*;
pub use crate::modules::notifications::args::*;
pub use crate::modules::reports::args::*;
pub use crate::modules::system::args::*;
pub use crate::modules::transactions::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "finops")]
#[command(about = "Finops back-office CLI")]
pub struct Cli {
    #[arg(long, env = "FINOPS_API_URL", help = "Backend base URL")]
    pub api_url: Option<String>,
    #[arg(long, env = "FINOPS_SESSION", value_enum, help = "Where session tokens are kept")]
    pub session: Option<SessionBackend>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// to remote hosts and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Login(LoginArgs),
    Register(RegisterArgs),
    Logout,
    #[command(about = "Show the logged-in user")]
    Whoami,
    Config(ConfigArgs),
    User(UserArgs),
    Invoice(InvoiceArgs),
    Transaction(TransactionArgs),
    #[command(about = "Manage bank accounts")]
    Account(AccountArgs),
    Report(ReportArgs),
    Notification(NotificationArgs),
    Anomaly(AnomalyArgs),
}
