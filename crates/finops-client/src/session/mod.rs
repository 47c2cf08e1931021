//! Persistence boundary for the session credentials.
//!
//! Nothing outside this module reads or writes stored tokens directly; the
//! client goes through [`Session`], which in turn talks to a [`SessionStore`].

mod file;
mod keychain;
mod memory;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{TokenPair, User};

pub use file::FileStore;
pub use keychain::KeyringStore;
pub use memory::MemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    User,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [Self::AccessToken, Self::RefreshToken, Self::User];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "token",
            Self::RefreshToken => "refreshToken",
            Self::User => "user",
        }
    }
}

pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Result<Option<String>, StoreError>;
    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError>;
    /// Removing a key that is not present is not an error.
    fn remove(&self, key: SessionKey) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn access_token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(SessionKey::AccessToken)
    }

    pub fn refresh_token(&self) -> Result<Option<String>, StoreError> {
        self.store.get(SessionKey::RefreshToken)
    }

    pub fn store_tokens(&self, tokens: &TokenPair) -> Result<(), StoreError> {
        self.store.set(SessionKey::AccessToken, &tokens.access)?;
        self.store.set(SessionKey::RefreshToken, &tokens.refresh)?;
        debug!("stored session tokens");
        Ok(())
    }

    pub fn set_access_token(&self, access: &str) -> Result<(), StoreError> {
        self.store.set(SessionKey::AccessToken, access)?;
        debug!("stored renewed access token");
        Ok(())
    }

    pub fn cached_user(&self) -> Result<Option<User>, StoreError> {
        self.store
            .get(SessionKey::User)?
            .map(|raw| serde_json::from_str(&raw).map_err(StoreError::from))
            .transpose()
    }

    pub fn cache_user(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(SessionKey::User, &raw)
    }

    /// Removes every session key. Keeps going past a failing key and reports
    /// the first failure.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut first_err = None;
        for key in SessionKey::ALL {
            if let Err(err) = self.store.remove(key) {
                warn!(key = key.as_str(), "failed to clear session key: {err}");
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
