//! `KeyValueStore` поверх `window.localStorage`.

use contracts::shared::kv_store::{KeyValueStore, StoreError};
use web_sys::window;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Result<web_sys::Storage, StoreError> {
    window()
        .ok_or(StoreError::Unavailable)?
        .local_storage()
        .map_err(|_| StoreError::Unavailable)?
        .ok_or(StoreError::Unavailable)
}

fn operation_error(key: &str, err: wasm_bindgen::JsValue) -> StoreError {
    StoreError::Operation {
        key: key.to_string(),
        reason: format!("{err:?}"),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|e| operation_error(key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| operation_error(key, e))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| operation_error(key, e))
    }
}
