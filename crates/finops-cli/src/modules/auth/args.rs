use clap::Args;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long, env = "FINOPS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "FINOPS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long, help = "Back-office role, e.g. accountant or financial_director")]
    pub role: Option<String>,
}
