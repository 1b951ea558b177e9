//! Persisted session token, the only client state that survives a restart.

use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use crate::{manager::replace_file, ConfigError};

/// Storage key the bearer token is kept under.
pub const TOKEN_KEY: &str = "jwtToken";

/// Persistence seam for the bearer token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, ConfigError>;
    fn save(&self, token: &str) -> Result<(), ConfigError>;
    fn clear(&self) -> Result<(), ConfigError>;
}

/// Key/value JSON file, shaped like browser local storage.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        replace_file(&self.path, &json)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, ConfigError> {
        Ok(self
            .read_entries()?
            .remove(TOKEN_KEY)
            .filter(|token| !token.is_empty()))
    }

    fn save(&self, token: &str) -> Result<(), ConfigError> {
        let mut entries = self.read_entries()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), ConfigError> {
        let mut entries = self.read_entries()?;
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

/// In-process store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.current())
    }

    fn save(&self, token: &str) -> Result<(), ConfigError> {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(token.to_string());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), ConfigError> {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = None;
        }
        Ok(())
    }
}
