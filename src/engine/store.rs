//! Storage boundary: a string key-value store and typed records on top of it.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::achievements::AchievementRecord;
use super::config::{ACHIEVEMENTS_KEY, PROFILE_KEY, SETTINGS_KEY, THEME_KEY};
use super::progression::ProfileRecord;
use super::settings::SettingsRecord;
use super::theme::Theme;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("stored {key} is unreadable: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Minimal string store, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend for native tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed access to every record the app keeps in storage.
#[derive(Debug, Clone)]
pub struct ProfileStore<S> {
    backend: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn load_profile(&self) -> Result<ProfileRecord, StoreError> {
        self.load_json(PROFILE_KEY)
    }

    pub fn save_profile(&mut self, record: &ProfileRecord) -> Result<(), StoreError> {
        self.save_json(PROFILE_KEY, record)
    }

    pub fn load_settings(&self) -> Result<SettingsRecord, StoreError> {
        self.load_json(SETTINGS_KEY)
    }

    pub fn save_settings(&mut self, record: &SettingsRecord) -> Result<(), StoreError> {
        self.save_json(SETTINGS_KEY, record)
    }

    /// Entries that do not read as an achievement are skipped. A value that is
    /// not a list at all is an error, so callers never save over it.
    pub fn load_achievements(&self) -> Result<Vec<AchievementRecord>, StoreError> {
        let Some(raw) = self.backend.get(ACHIEVEMENTS_KEY)? else {
            return Ok(Vec::new());
        };
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt {
                key: ACHIEVEMENTS_KEY.to_string(),
                reason: err.to_string(),
            })?;
        Ok(entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::debug!("skipping stored achievement: {err}");
                    None
                }
            })
            .collect())
    }

    pub fn save_achievements(&mut self, records: &[AchievementRecord]) -> Result<(), StoreError> {
        self.save_json(ACHIEVEMENTS_KEY, records)
    }

    pub fn load_theme(&self) -> Result<Theme, StoreError> {
        Ok(self
            .backend
            .get(THEME_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.backend.set(THEME_KEY, theme.as_str())
    }

    /// Missing or unparseable records fall back to `T::default()`.
    fn load_json<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::debug!("ignoring malformed record {key}: {err}");
                Ok(T::default())
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: err.to_string(),
        })?;
        self.backend.set(key, &raw)
    }
}
