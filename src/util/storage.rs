//! Browser `localStorage` backing for the session token.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is browser-only; without the `csr` feature reads see no
//! token and writes report the store as unavailable.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::session::{StoreError, TokenStore};

/// Token slot stored under a fixed `localStorage` key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().unwrap_or(None))
}

#[cfg(feature = "csr")]
fn rejected(err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).unwrap_or(None)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage.set_item(&self.key, token).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StoreError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage.remove_item(&self.key).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}
