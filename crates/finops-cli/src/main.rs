use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;

use finops_client::{
    ApiClient, ApiError, ClientConfig, FileStore, KeyringStore, LoginRedirect, SessionStore,
};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::{handle_login, handle_logout, handle_register};
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, save_config, CommandContext,
    SessionBackend,
};
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_ADDR: &str = finops_client::DEFAULT_API_URL;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;

    let command = match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
            return Ok(());
        }
        command => command,
    };

    let addr = cli
        .api_url
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());
    ensure_secure_addr(&addr, cli.insecure)?;
    let backend = cli.session.or(config.session).unwrap_or_default();
    tracing::debug!(api_url = %addr, backend = ?backend, "client configured");
    let client = build_client(&addr, backend, cli.insecure)?;
    let ctx = CommandContext { client: &client };

    let result = match command {
        Command::Login(args) => handle_login(args, &ctx).await,
        Command::Register(args) => handle_register(args, &ctx).await,
        Command::Logout => {
            handle_logout(&ctx);
            Ok(())
        }
        command => handle_command(command, &ctx).await,
    };
    result.map_err(explain_error)
}

fn build_client(
    addr: &str,
    backend: SessionBackend,
    allow_insecure: bool,
) -> anyhow::Result<ApiClient> {
    let http = reqwest::Client::builder()
        .danger_accept_invalid_certs(allow_insecure)
        .build()?;
    let store: Arc<dyn SessionStore> = match backend {
        SessionBackend::File => Arc::new(FileStore::new(FileStore::default_path()?)),
        SessionBackend::Keyring => Arc::new(KeyringStore::new(addr)),
    };
    Ok(ApiClient::builder()
        .config(ClientConfig::new(addr))
        .http_client(http)
        .store(store)
        .login_redirect(LoginHint)
        .build())
}

/// Tells the user how to get back in after the session was cut short.
struct LoginHint;

impl LoginRedirect for LoginHint {
    fn redirect_to_login(&self, _login_path: &str) {
        eprintln!("Session ended. Run `finops login` to sign in again.");
    }

    fn logged_out(&self, _login_path: &str) {}
}

fn explain_error(err: anyhow::Error) -> anyhow::Error {
    let Some(api_err) = err.downcast_ref::<ApiError>() else {
        return err;
    };
    if api_err.is_auth_expired() {
        return anyhow::anyhow!("session expired; run `finops login`");
    }
    match api_err.status() {
        Some(status) => {
            let detail = api_err.detail().unwrap_or_default();
            anyhow::anyhow!("Request failed: {status} {detail}")
        }
        None => err,
    }
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
