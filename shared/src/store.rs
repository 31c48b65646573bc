//! # Birth Date Storage
//!
//! A single string key mapped to a single string value. The browser build
//! backs this with `localStorage`; `MemoryStore` serves tests and pages where
//! local storage is unavailable.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StoreError;

/// Key-value slot holding the persisted birth date
pub trait BirthDateStore {
    /// Stored value, or `None` when the key is absent
    fn load(&self) -> Result<Option<String>, StoreError>;

    fn save(&self, value: &str) -> Result<(), StoreError>;

    /// Remove the key; removing an absent key is not an error
    fn delete(&self) -> Result<(), StoreError>;
}

impl<S: BirthDateStore + ?Sized> BirthDateStore for Rc<S> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        (**self).save(value)
    }

    fn delete(&self) -> Result<(), StoreError> {
        (**self).delete()
    }
}

impl<S: BirthDateStore + ?Sized> BirthDateStore for Box<S> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        (**self).save(value)
    }

    fn delete(&self) -> Result<(), StoreError> {
        (**self).delete()
    }
}

/// In-process store; contents are lost with the page
#[derive(Debug, Default)]
pub struct MemoryStore {
    key: String,
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: RefCell::new(None),
        }
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: RefCell::new(Some(value.into())),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn contains_key(&self) -> bool {
        self.value.borrow().is_some()
    }
}

impl BirthDateStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<(), StoreError> {
        self.value.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryStore::new("birthDate");
        assert_eq!(store.key(), "birthDate");
        assert_eq!(store.load().unwrap(), None);

        store.save("2020-01-01").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("2020-01-01"));

        store.save("2022-03-03").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("2022-03-03"));

        store.delete().unwrap();
        assert!(!store.contains_key());
        store.delete().unwrap();
    }

    #[test]
    fn test_shared_store_sees_writes() {
        let store = Rc::new(MemoryStore::with_value("birthDate", "1990-05-17"));
        let boxed: Box<dyn BirthDateStore> = Box::new(store.clone());

        assert_eq!(boxed.load().unwrap().as_deref(), Some("1990-05-17"));
        boxed.delete().unwrap();
        assert!(!store.contains_key());
    }
}
