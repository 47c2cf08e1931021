use std::fs;
use std::path::{Path, PathBuf};

use super::output::print_json;
use super::types::CliConfig;
use crate::cli_args::{ConfigArgs, ConfigCommand};

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Set(args) => {
            if args.api_url.is_none() && args.session.is_none() {
                anyhow::bail!("nothing to set; pass --api-url or --session");
            }
            if let Some(api_url) = args.api_url {
                let api_url = api_url.trim().trim_end_matches('/').to_string();
                if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
                    anyhow::bail!("api url must start with http:// or https://");
                }
                config.api_url = Some(api_url);
            }
            if let Some(session) = args.session {
                config.session = Some(session);
            }
        }
        ConfigCommand::Show => {
            print_json(&serde_json::to_value(&*config)?)?;
        }
        ConfigCommand::Reset => {
            *config = CliConfig::default();
        }
    }
    Ok(())
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".finops").join("config.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Plain http is only accepted for loopback hosts unless `--insecure` is set.
pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    let Some(rest) = addr.strip_prefix("http://") else {
        return Ok(());
    };
    if allow_insecure || is_loopback(rest) {
        return Ok(());
    }
    anyhow::bail!("refusing to use http:// for a remote host without --insecure")
}

fn is_loopback(authority_and_path: &str) -> bool {
    let authority = authority_and_path
        .split('/')
        .next()
        .unwrap_or_default();
    let host = match authority.strip_prefix('[') {
        Some(v6) => v6.split(']').next().unwrap_or_default(),
        None => authority.split(':').next().unwrap_or_default(),
    };
    matches!(host, "localhost" | "127.0.0.1" | "::1")
}
