use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{RefreshRequest, RefreshResponse};
use crate::request::{ApiRequest, FilePart, RequestBody};
use crate::session::{Session, SessionStore};

pub const REFRESH_PATH: &str = "/token/refresh/";

/// Receives the login entry point when the session is terminated.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self, login_path: &str);

    /// Called instead of [`redirect_to_login`](Self::redirect_to_login) when
    /// the session ended through an explicit logout.
    fn logged_out(&self, login_path: &str) {
        self.redirect_to_login(login_path)
    }
}

impl<F> LoginRedirect for F
where
    F: Fn(&str) + Send + Sync,
{
    fn redirect_to_login(&self, login_path: &str) {
        self(login_path)
    }
}

/// Only records the redirect in the log.
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self, login_path: &str) {
        warn!(login_path = %login_path, "session terminated; login required");
    }
}

pub struct ApiClientBuilder {
    config: ClientConfig,
    http: Option<reqwest::Client>,
    session: Option<Session>,
    redirect: Option<Arc<dyn LoginRedirect>>,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn store(self, store: Arc<dyn SessionStore>) -> Self {
        self.session(Session::new(store))
    }

    pub fn login_redirect(mut self, redirect: impl LoginRedirect + 'static) -> Self {
        self.redirect = Some(Arc::new(redirect));
        self
    }

    pub fn build(self) -> ApiClient {
        ApiClient {
            http: self.http.unwrap_or_default(),
            config: self.config,
            session: self.session.unwrap_or_else(Session::in_memory),
            redirect: self.redirect.unwrap_or_else(|| Arc::new(LogRedirect)),
            refresh_lock: Mutex::new(()),
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Session,
    redirect: Arc<dyn LoginRedirect>,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder {
            config: ClientConfig::from_env(),
            http: None,
            session: None,
            redirect: None,
        }
    }

    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self::builder().config(config).session(session).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends `request` with the stored access token.
    ///
    /// A `401` on this first attempt runs the refresh protocol and replays the
    /// request once with the renewed token; whatever the replay yields is
    /// returned as is. Non-2xx responses become [`ApiError::Http`].
    pub async fn request(&self, request: &ApiRequest) -> Result<reqwest::Response, ApiError> {
        let token = self.session.access_token()?;
        let response = self.send_once(request, token.as_deref()).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return ensure_success(response).await;
        }

        info!(
            method = %request.method(),
            path = %request.path(),
            "request unauthorized; refreshing access token"
        );
        let access = self.refresh_access_token(token.as_deref()).await?;
        let response = self.send_once(request, Some(&access)).await?;
        ensure_success(response).await
    }

    pub async fn request_json<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<T, ApiError> {
        let response = self.request(request).await?;
        decode_json(response).await
    }

    pub async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.request_json(&ApiRequest::get(path)).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.request_json(&ApiRequest::post(path).with_json(body)).await
    }

    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.request_json(&ApiRequest::patch(path).with_json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(&ApiRequest::delete(path)).await?;
        Ok(())
    }

    pub async fn post_multipart(
        &self,
        path: &str,
        parts: Vec<FilePart>,
    ) -> Result<serde_json::Value, ApiError> {
        self.request_json(&ApiRequest::post(path).with_multipart(parts)).await
    }

    /// Clears the stored session and sends the login redirect. Safe to call
    /// when already logged out.
    pub fn terminate_session(&self) {
        self.clear_session();
        self.redirect.redirect_to_login(&self.config.login_path);
    }

    /// Same as [`terminate_session`](Self::terminate_session), but reports
    /// the end of the session through [`LoginRedirect::logged_out`].
    pub fn sign_out(&self) {
        self.clear_session();
        self.redirect.logged_out(&self.config.login_path);
    }

    fn clear_session(&self) {
        if let Err(err) = self.session.clear() {
            warn!("failed to clear session: {err}");
        }
    }

    pub(crate) async fn send_once(
        &self,
        request: &ApiRequest,
        access_token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = request.url(&self.config.base_url);
        let mut builder = self.http.request(request.method().clone(), &url);
        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body() {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(body),
            RequestBody::Multipart(parts) => builder.multipart(ApiRequest::multipart_form(parts)?),
        };
        debug!(
            method = %request.method(),
            url = %url,
            authenticated = access_token.is_some(),
            "http request"
        );
        let start = std::time::Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %request.method(),
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    /// Obtains a new access token, one refresh at a time.
    ///
    /// `rejected` is the token the backend just refused. If another task has
    /// already replaced it while this one waited for the lock, the stored token
    /// is reused instead of refreshing again.
    async fn refresh_access_token(&self, rejected: Option<&str>) -> Result<String, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.session.access_token()? {
            if rejected != Some(current.as_str()) {
                debug!("access token already renewed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.session.refresh_token()? else {
            warn!("no refresh token stored; ending session");
            self.terminate_session();
            return Err(ApiError::AuthExpired);
        };

        match self.request_refresh(&refresh_token).await {
            Ok(access) => {
                self.session.set_access_token(&access)?;
                info!("access token refreshed");
                Ok(access)
            }
            Err(err) => {
                warn!("token refresh failed: {err}");
                self.terminate_session();
                Err(ApiError::AuthExpired)
            }
        }
    }

    async fn request_refresh(&self, refresh_token: &str) -> Result<String, ApiError> {
        let payload = RefreshRequest {
            refresh: refresh_token.to_string(),
        };
        let request = ApiRequest::post(REFRESH_PATH).with_json(serde_json::to_value(&payload)?);
        let response = self.send_once(&request, None).await?;
        let response = ensure_success(response).await?;
        let refreshed: RefreshResponse = decode_json(response).await?;
        Ok(refreshed.access)
    }
}

pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http { status, body })
}

/// Decodes a JSON body; an empty body decodes as `null`.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn terminate_session_clears_store_and_redirects_every_time() -> anyhow::Result<()> {
        let redirects = Arc::new(AtomicUsize::new(0));
        let seen = redirects.clone();
        let client = ApiClient::builder()
            .base_url("http://127.0.0.1:9")
            .login_redirect(move |path: &str| {
                assert_eq!(path, "/login");
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .build();
        client.session().store_tokens(&crate::models::TokenPair {
            access: "A1".to_string(),
            refresh: "R1".to_string(),
        })?;

        client.terminate_session();
        client.terminate_session();

        assert_eq!(client.session().access_token()?, None);
        assert_eq!(client.session().refresh_token()?, None);
        assert_eq!(redirects.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Recorder {
        forced: Arc<AtomicUsize>,
        requested: Arc<AtomicUsize>,
    }

    impl LoginRedirect for Recorder {
        fn redirect_to_login(&self, _login_path: &str) {
            self.forced.fetch_add(1, Ordering::SeqCst);
        }

        fn logged_out(&self, _login_path: &str) {
            self.requested.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn sign_out_is_reported_apart_from_forced_termination() -> anyhow::Result<()> {
        let recorder = Recorder::default();
        let client = ApiClient::builder()
            .base_url("http://127.0.0.1:9")
            .login_redirect(recorder.clone())
            .build();
        client.session().store_tokens(&crate::models::TokenPair {
            access: "A1".to_string(),
            refresh: "R1".to_string(),
        })?;

        client.sign_out();
        assert_eq!(client.session().refresh_token()?, None);
        assert_eq!(recorder.requested.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.forced.load(Ordering::SeqCst), 0);

        client.terminate_session();
        assert_eq!(recorder.forced.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn builder_defaults_to_in_memory_session() -> anyhow::Result<()> {
        let client = ApiClient::new(
            ClientConfig::new("http://books.test/api"),
            Session::in_memory(),
        );
        assert_eq!(client.config().base_url, "http://books.test/api");
        assert_eq!(client.session().access_token()?, None);
        Ok(())
    }
}
