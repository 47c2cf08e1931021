//! Client for the finops back-office REST API.
//!
//! Every call goes through [`ApiClient`], which attaches the stored bearer
//! token and renews it once through the refresh endpoint when the backend
//! answers `401 Unauthorized`.

mod client;
mod config;
mod error;
pub mod models;
mod request;
pub mod services;
pub mod session;

pub use client::{ApiClient, ApiClientBuilder, LogRedirect, LoginRedirect, REFRESH_PATH};
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL, LOGIN_PATH};
pub use error::{ApiError, StoreError};
pub use request::{append_params, build_params, opt_param, ApiRequest, FilePart, RequestBody};
pub use session::{FileStore, KeyringStore, MemoryStore, Session, SessionKey, SessionStore};
