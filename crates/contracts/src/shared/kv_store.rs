//! Строковое key-value хранилище, которое передается в `FavoritesLedger` и
//! `SessionFlags` при создании.
//!
//! В браузере реализуется поверх `window.localStorage` (см. frontend),
//! в тестах используется [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Хранилище недоступно (нет `window`, приватный режим и т.п.)
    #[error("storage is unavailable")]
    Unavailable,
    /// Операция чтения/записи отклонена (например, превышена квота)
    #[error("storage operation on `{key}` failed: {reason}")]
    Operation { key: String, reason: String },
}

/// Каждая операция атомарна в пределах одного ключа.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

/// Хранилище в памяти
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Хранилище, в котором каждая операция завершается ошибкой
    pub struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Operation {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            })
        }

        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
        assert_eq!(store.len(), 1);

        store.delete("k").unwrap();
        assert_eq!(store.get("k"), Ok(None));
        assert!(store.is_empty());
    }

    #[test]
    fn test_shared_through_rc() {
        let store = Rc::new(MemoryStore::new());
        let a = Rc::clone(&store);
        a.set("k", "1").unwrap();
        assert_eq!(store.get("k"), Ok(Some("1".to_string())));
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Operation {
            key: "favoriteVacancies".into(),
            reason: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "storage operation on `favoriteVacancies` failed: quota exceeded"
        );
    }
}
