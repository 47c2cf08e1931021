use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::{SessionKey, SessionStore};
use crate::error::StoreError;

type Entries = BTreeMap<String, String>;

/// Session persisted as a flat JSON object on disk.
///
/// The file is removed once the last key is cleared, so a logged-out session
/// leaves nothing behind.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `~/.finops/session.json`
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| {
                StoreError::Io(std::io::Error::new(ErrorKind::NotFound, "HOME is not set"))
            })?;
        Ok(Path::new(&home).join(".finops").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(err.into()),
        };
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Like `load`, but an unreadable document counts as an empty session so
    /// that writes and clears can replace it.
    fn load_for_update(&self) -> Result<Entries, StoreError> {
        match self.load() {
            Err(StoreError::Corrupt(err)) => {
                warn!(path = %self.path.display(), "discarding corrupt session file: {err}");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &Entries) -> Result<(), StoreError> {
        if entries.is_empty() {
            return remove_if_exists(&self.path);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        // Written beside the target and renamed over it, so a reader never
        // sees a half-written session.
        let tmp = self.path.with_extension("json.tmp");
        remove_if_exists(&tmp)?;
        let mut file = owner_only_options().open(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(unix)]
fn owner_only_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true).mode(0o600);
    options
}

#[cfg(not(unix))]
fn owner_only_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    options
}

impl SessionStore for FileStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.load()?.remove(key.as_str()))
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.load_for_update()?;
        entries.insert(key.as_str().to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: SessionKey) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = match self.load() {
            Err(StoreError::Corrupt(err)) => {
                warn!(path = %self.path.display(), "removing corrupt session file: {err}");
                return remove_if_exists(&self.path);
            }
            other => other?,
        };
        if entries.remove(key.as_str()).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}
