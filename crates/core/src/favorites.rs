//! Favorited listings persisted in client-local storage.
//!
//! [`Favorites`] owns the set in memory and writes the whole set back to a
//! [`KeyValueStore`] after every change. Loading never fails: missing,
//! unreadable or corrupt data starts an empty set.

use std::collections::HashMap;

use crate::types::PropertyId;

/// Storage key holding the serialized favorites set.
pub const FAVORITES_KEY: &str = "realEstateFavorites";

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing medium holds data that can't be decoded.
    #[error("storage data is corrupt: {0}")]
    Corrupt(String),
    /// A value couldn't be encoded for storage.
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed, string-valued durable storage local to one client.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium can't be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing medium can't be written.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Volatile [`KeyValueStore`] backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// The set of listings the user has favorited.
///
/// IDs are kept in the order they were added and never repeat.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
    ids: Vec<PropertyId>,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Load the favorites set from `store`.
    ///
    /// A missing key yields an empty set. Read failures and undecodable data
    /// are logged and also yield an empty set.
    pub fn load(store: S) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read favorites, starting empty");
                Vec::new()
            }
        };

        Self { store, ids }
    }

    /// Returns true if `id` is in the set.
    #[must_use]
    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` to the set and persist it.
    ///
    /// Returns `false` without writing if `id` was already present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails. The in-memory set keeps the
    /// change.
    pub fn add(&mut self, id: PropertyId) -> Result<bool, StoreError> {
        if self.is_favorite(id) {
            return Ok(false);
        }
        self.ids.push(id);
        self.persist()?;
        Ok(true)
    }

    /// Remove `id` from the set and persist it.
    ///
    /// Returns `false` without writing if `id` was absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails. The in-memory set keeps the
    /// change.
    pub fn remove(&mut self, id: PropertyId) -> Result<bool, StoreError> {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        if self.ids.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip membership of `id`, returning whether it is now a favorite.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting fails.
    pub fn toggle(&mut self, id: PropertyId) -> Result<bool, StoreError> {
        if self.is_favorite(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Favorited IDs in the order they were added.
    #[must_use]
    pub fn ids(&self) -> &[PropertyId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.ids)?;
        self.store.set(FAVORITES_KEY, encoded)
    }
}

fn decode(raw: &str) -> Vec<PropertyId> {
    match serde_json::from_str::<Vec<PropertyId>>(raw) {
        Ok(stored) => {
            let mut ids = Vec::with_capacity(stored.len());
            for id in stored {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            ids
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stored favorites are corrupt, starting empty");
            Vec::new()
        }
    }
}
