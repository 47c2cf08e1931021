use clap::ValueEnum;
use finops_client::ApiClient;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub session: Option<SessionBackend>,
}

#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    File,
    Keyring,
}

pub struct CommandContext<'a> {
    pub client: &'a ApiClient,
}
