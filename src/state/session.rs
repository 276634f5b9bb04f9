//! Session token access for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the token; the navigation gate only reads it. The
//! store sits behind [`TokenStore`] so the gate can run against an in-memory
//! fake instead of `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Errors from writing or clearing the session token.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("token storage is unavailable")]
    Unavailable,
    #[error("refusing to store a blank token")]
    BlankToken,
    #[error("token storage rejected the write: {0}")]
    Rejected(String),
}

/// Synchronous key-value slot holding the session token under a fixed key.
pub trait TokenStore {
    /// Current token, or `None` when absent or unreadable.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage refuses the write.
    fn set(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing storage refuses the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory token slot for tests. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(RwLock::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// A token counts only when present and not blank after trimming.
pub fn token_is_present(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.trim().is_empty())
}

/// Read-only view of the session used by the navigation gate.
#[derive(Clone, Debug)]
pub struct SessionReader<S> {
    store: S,
}

impl<S: TokenStore> SessionReader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether a usable session token is currently committed.
    pub fn is_authenticated(&self) -> bool {
        token_is_present(self.store.get().as_deref())
    }
}

/// Persist a freshly issued token.
///
/// Login view API: the view calls this with the issued token, then navigates
/// to [`crate::routes::post_login_target`].
///
/// # Errors
///
/// Returns [`StoreError::BlankToken`] for a blank token, or the store's own
/// error when the write fails.
pub fn sign_in<S: TokenStore>(store: &S, token: &str) -> Result<(), StoreError> {
    if !token_is_present(Some(token)) {
        return Err(StoreError::BlankToken);
    }
    store.set(token)?;
    log::info!("session token stored");
    Ok(())
}

/// Drop the current session token.
///
/// Logout API for views; the next guarded transition then sees no session.
///
/// # Errors
///
/// Returns the store's error when the removal fails.
pub fn sign_out<S: TokenStore>(store: &S) -> Result<(), StoreError> {
    store.clear()?;
    log::info!("session token cleared");
    Ok(())
}
