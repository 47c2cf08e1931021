pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const API_URL_ENV: &str = "FINOPS_API_URL";
pub const LOGIN_PATH: &str = "/login";

/// Where the backend lives and where a terminated session is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub login_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            login_path: LOGIN_PATH.to_string(),
        }
    }

    /// Uses `FINOPS_API_URL` when set, the local development backend otherwise.
    pub fn from_env() -> Self {
        Self::resolve(None)
    }

    pub fn resolve(explicit: Option<String>) -> Self {
        Self::new(pick_base_url(explicit, std::env::var(API_URL_ENV).ok()))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn pick_base_url(explicit: Option<String>, env: Option<String>) -> String {
    explicit
        .into_iter()
        .chain(env)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
