use shared::{BirthDateStore, MemoryStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::services::logging::Logger;

/// Birth date slot in the browser's `localStorage`
///
/// Values are stored raw (`YYYY-MM-DD`), not JSON-encoded.
pub struct LocalStore {
    key: String,
    storage: Storage,
}

impl LocalStore {
    pub fn open(key: impl Into<String>) -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|_| StoreError::Unavailable)?
            .ok_or(StoreError::Unavailable)?;

        Ok(Self {
            key: key.into(),
            storage,
        })
    }

    fn operation_error(&self, operation: &'static str, err: JsValue) -> StoreError {
        StoreError::Operation {
            operation,
            key: self.key.clone(),
            reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}

impl BirthDateStore for LocalStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(&self.key)
            .map_err(|e| self.operation_error("read", e))
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(&self.key, value)
            .map_err(|e| self.operation_error("write", e))
    }

    fn delete(&self) -> Result<(), StoreError> {
        self.storage
            .remove_item(&self.key)
            .map_err(|e| self.operation_error("remove", e))
    }
}

/// Local storage when the browser allows it, otherwise an in-memory slot
pub fn open_store(key: &str) -> Box<dyn BirthDateStore> {
    match LocalStore::open(key) {
        Ok(store) => Box::new(store),
        Err(e) => {
            Logger::warn_with_component(
                "storage",
                &format!("{e}; the birth date will not survive a reload"),
            );
            Box::new(MemoryStore::new(key))
        }
    }
}
