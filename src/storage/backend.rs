//! Storage backends.

use std::cell::RefCell;

use mockall::automock;
use rustc_hash::FxHashMap;

/// Key-value persistence port.
///
/// A backend models an environment where persistence either works or is
/// absent entirely; individual operations do not fail. Absent keys read as
/// `None`, writes replace whole payloads, and two uncoordinated writers of
/// the same key resolve last-write-wins.
#[automock]
pub trait StorageBackend {
    /// Fetch the raw payload stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous payload.
    fn set(&self, key: &str, value: &str);

    /// Delete the payload stored under `key`, if present.
    fn remove(&self, key: &str);
}

/// In-memory backend.
///
/// Single-threaded by design: all storefront mutations happen from one
/// event loop, so interior mutability with a [`RefCell`] is sufficient.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<FxHashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Backend for environments without persistent storage, such as a
/// prerendering pass. Every read is empty and every write is a no-op.
///
/// Selecting this backend is an explicit construction-time decision, not an
/// ambient runtime check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStorage;

impl StorageBackend for DetachedStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_values() {
        let storage = MemoryStorage::new();

        storage.set("a", "1");

        assert_eq!(storage.get("a"), Some("1".to_string()));
    }

    #[test]
    fn memory_storage_missing_key_reads_none() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn memory_storage_set_replaces_previous_payload() {
        let storage = MemoryStorage::new();

        storage.set("a", "1");
        storage.set("a", "2");

        assert_eq!(storage.get("a"), Some("2".to_string()));
    }

    #[test]
    fn memory_storage_remove_deletes_key() {
        let storage = MemoryStorage::new();

        storage.set("a", "1");
        storage.remove("a");

        assert_eq!(storage.get("a"), None);
    }

    #[test]
    fn memory_storage_remove_unknown_key_is_noop() {
        let storage = MemoryStorage::new();

        storage.remove("missing");

        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn detached_storage_reads_empty_and_ignores_writes() {
        let storage = DetachedStorage;

        storage.set("a", "1");

        assert_eq!(storage.get("a"), None);

        storage.remove("a");
    }
}
