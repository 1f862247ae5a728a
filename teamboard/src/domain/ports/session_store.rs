//! Driven port for durable session persistence.
//!
//! Modelled on browser local storage: a small key-value store of strings that
//! survives restarts. The session model keeps one identity snapshot under
//! [`SESSION_KEY`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::define_port_error;

/// Well-known key holding the serialized identity snapshot.
pub const SESSION_KEY: &str = "user";

define_port_error! {
    /// Failures raised by session store adapters.
    pub enum SessionStoreError {
        /// Reading or writing the backing medium failed.
        Io { message: String } => "session store I/O failed: {message}",
        /// The key cannot be represented by the adapter.
        InvalidKey { key: String } => "session store key '{key}' is not supported",
    }
}

/// Port over a durable string key-value store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), SessionStoreError>;
}

/// Process-local session store backed by a map.
///
/// Values do not survive the process; use it for tests or when embedding the
/// model somewhere that supplies its own persistence.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `key = value`.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Synchronous peek used by tests and diagnostics.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // The map holds plain strings, so a poisoned guard is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn read(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionStoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn write_read_remove_cycle() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.read(SESSION_KEY).await, Ok(None));

        store.write(SESSION_KEY, "{}").await.expect("write");
        assert_eq!(store.read(SESSION_KEY).await, Ok(Some("{}".to_owned())));

        store.remove(SESSION_KEY).await.expect("remove");
        assert_eq!(store.read(SESSION_KEY).await, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn removing_missing_key_succeeds() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.remove("absent").await, Ok(()));
    }

    #[rstest]
    fn seeded_entry_is_visible() {
        let store = InMemorySessionStore::with_entry(SESSION_KEY, "snapshot");
        assert_eq!(store.get(SESSION_KEY).as_deref(), Some("snapshot"));
    }
}
