use tracing::{debug, info};

use crate::client::{decode_json, ensure_success};
use crate::models::{LoginRequest, NewUser, TokenPair, User};
use crate::{ApiClient, ApiError, ApiRequest};

pub const TOKEN_PATH: &str = "/token/";
pub const REGISTER_PATH: &str = "/users/register/";
pub const ME_PATH: &str = "/users/me/";

pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a token pair and stores both tokens.
    ///
    /// Bypasses the refresh protocol: a rejected login is returned to the
    /// caller as [`ApiError::Http`] with the backend's body.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post(TOKEN_PATH).with_json(serde_json::to_value(&payload)?);
        let response = self.client.send_once(&request, None).await?;
        let response = ensure_success(response).await?;
        let tokens: TokenPair = decode_json(response).await?;
        self.client.session().store_tokens(&tokens)?;
        info!(username = %username, "logged in");
        Ok(tokens)
    }

    pub async fn register(&self, user: &NewUser) -> Result<serde_json::Value, ApiError> {
        self.client
            .post(REGISTER_PATH, serde_json::to_value(user)?)
            .await
    }

    /// Registers, then logs in with the same credentials and caches the user.
    pub async fn register_and_login(&self, user: &NewUser) -> Result<User, ApiError> {
        self.register(user).await?;
        self.login(&user.username, &user.password).await?;
        let current = self.current_user().await?;
        self.client.session().cache_user(&current)?;
        Ok(current)
    }

    /// Ends the session locally; no request is sent.
    pub fn logout(&self) {
        self.client.sign_out();
        info!("logged out");
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.client.request_json(&ApiRequest::get(ME_PATH)).await
    }

    /// Fetches and caches the current user when an access token is stored.
    pub async fn load_user(&self) -> Result<Option<User>, ApiError> {
        if self.client.session().access_token()?.is_none() {
            debug!("no access token; skipping user load");
            return Ok(None);
        }
        let user = self.current_user().await?;
        self.client.session().cache_user(&user)?;
        Ok(Some(user))
    }
}
