use super::{SessionKey, SessionStore};
use crate::error::StoreError;

const SERVICE: &str = "finops";

/// Session kept in the OS keychain, one entry per key and profile.
///
/// The profile keeps sessions for different backends apart; the CLI uses the
/// normalized API URL.
pub struct KeyringStore {
    profile: String,
}

impl KeyringStore {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    fn entry(&self, key: SessionKey) -> Result<keyring::Entry, StoreError> {
        keyring::Entry::new(SERVICE, &keyring_key(&self.profile, key))
            .map_err(|err| StoreError::Keyring(format!("failed to access keyring: {err}")))
    }
}

fn keyring_key(profile: &str, key: SessionKey) -> String {
    format!("{}::{}", profile.trim_end_matches('/'), key.as_str())
}

impl SessionStore for KeyringStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, StoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(StoreError::Keyring(format!(
                "failed to load {} for '{}': {err}",
                key.as_str(),
                self.profile
            ))),
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|err| StoreError::Keyring(format!("failed to store {}: {err}", key.as_str())))
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        match self.entry(key)?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(StoreError::Keyring(format!(
                "failed to delete {}: {err}",
                key.as_str()
            ))),
        }
    }
}
