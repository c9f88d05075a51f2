use alloc::string::String;
use hashbrown::HashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::*;

/// Fixed storage identifier for a persisted type.
pub trait StorageKey {
    const KEY: &'static str;
}

impl StorageKey for Game {
    const KEY: &'static str = "doblete:game";
}

/// String key-value storage a game can be saved into. Backends range from
/// browser local storage to a plain in-memory map; the typed helpers ride on
/// the three raw operations.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);

    /// Saves `value` under its fixed key, replacing any previous save.
    fn save<T: Serialize + StorageKey>(&mut self, value: &T) -> Result<()> {
        let encoded = serde_json::to_string(value).map_err(|err| {
            log::error!("Could not save {}: {:?}", T::KEY, err);
            GameError::CorruptSave
        })?;
        self.set(T::KEY, encoded);
        Ok(())
    }

    /// Loads the stored value, `None` when nothing was saved yet.
    fn load<T: DeserializeOwned + StorageKey>(&self) -> Result<Option<T>> {
        let Some(encoded) = self.get(T::KEY) else {
            return Ok(None);
        };
        let value = serde_json::from_str(&encoded).map_err(|err| {
            log::warn!("Discarding undecodable {}: {:?}", T::KEY, err);
            GameError::CorruptSave
        })?;
        Ok(Some(value))
    }

    /// Drops the stored value, e.g. when starting a fresh game.
    fn clear<T: StorageKey>(&mut self) {
        self.remove(T::KEY);
    }
}

/// In-memory backend, also used by the tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.into(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
