use std::collections::HashMap;
use std::sync::Mutex;

use super::{SessionKey, SessionStore};
use crate::error::StoreError;

/// Process-local store; nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<SessionKey, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.remove(&key);
        Ok(())
    }
}
