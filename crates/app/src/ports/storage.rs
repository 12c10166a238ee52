//! Storage port: synchronous key-value persistence (e.g. `localStorage`).

use corpdash_domain::error::StorageError;

/// Flat string-to-string storage. Last writer wins.
pub trait KeyValueStore {
    /// Read `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    fn remember<S: KeyValueStore>(store: S) -> Result<(), StorageError> {
        store.set("theme", "dark")
    }

    #[test]
    fn should_write_through_borrowed_store() {
        let store = MemoryStore::default();
        remember(&store).unwrap();

        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        (&store).remove("theme").unwrap();
        assert_eq!(store.raw("theme"), None);
    }
}
