//! Persistent store: named collections over an injected key-value port.

use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

pub mod backend;
mod file;

pub use backend::{DetachedStorage, MemoryStorage, StorageBackend};
pub use file::FileStorage;

/// Fixed storage keys for the five persisted collections.
pub mod keys {
    /// Catalog of listed games.
    pub const CATALOG: &str = "replay_catalog";

    /// Shopping cart lines.
    pub const CART: &str = "replay_cart";

    /// Current user session.
    pub const SESSION: &str = "replay_session";

    /// Finalized orders.
    pub const ORDERS: &str = "replay_orders";

    /// Signup credentials.
    pub const CREDENTIALS: &str = "replay_credentials";
}

/// Typed access to the persisted collections, shared by every service.
///
/// Collections are read and written whole as JSON documents. There is no
/// transaction spanning keys: a crash between two writes can lose or
/// duplicate state, which this demo accepts.
#[derive(Clone)]
pub struct Store {
    backend: Rc<dyn StorageBackend>,
}

impl Debug for Store {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Store")
    }
}

impl Store {
    /// Create a store over the given backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Store backed by process memory. The usual choice for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Store for an environment without persistent storage: every read is
    /// the empty default and every write a no-op.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(DetachedStorage)
    }

    /// Read a collection, falling back to its default when the key is
    /// absent. An undecodable payload also falls back to the default so a
    /// corrupted entry cannot wedge the storefront.
    #[must_use]
    pub fn read<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.backend.get(key) else {
            return T::default();
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(key, error = %error, "discarding undecodable collection payload");
            T::default()
        })
    }

    /// Serialize and write a collection under `key`.
    pub fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.set(key, &raw),
            Err(error) => warn!(key, error = %error, "failed to encode collection"),
        }
    }

    /// Delete the collection stored under `key`.
    pub fn remove(&self, key: &str) {
        self.backend.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::backend::MockStorageBackend;
    use super::*;

    #[test]
    fn read_missing_key_yields_default() {
        let store = Store::in_memory();

        let values: Vec<u32> = store.read("absent");

        assert!(values.is_empty());
    }

    #[test]
    fn read_round_trips_written_collection() {
        let store = Store::in_memory();

        store.write("numbers", &vec![1u32, 2, 3]);

        let values: Vec<u32> = store.read("numbers");

        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn read_undecodable_payload_yields_default() {
        let store = Store::in_memory();

        store.backend.set("numbers", "not json");

        let values: Vec<u32> = store.read("numbers");

        assert!(values.is_empty());
    }

    #[test]
    fn remove_deletes_collection() {
        let store = Store::in_memory();

        store.write("numbers", &vec![1u32]);
        store.remove("numbers");

        let values: Vec<u32> = store.read("numbers");

        assert!(values.is_empty());
    }

    #[test]
    fn detached_store_reads_default_and_ignores_writes() {
        let store = Store::detached();

        store.write("numbers", &vec![1u32, 2]);

        let values: Vec<u32> = store.read("numbers");

        assert!(values.is_empty());
    }

    #[test]
    fn read_consults_backend_with_the_given_key() {
        let mut backend = MockStorageBackend::new();

        backend
            .expect_get()
            .withf(|key| key == "replay_cart")
            .return_const(Some("[7]".to_string()));

        let store = Store::new(backend);

        let values: Vec<u32> = store.read(keys::CART);

        assert_eq!(values, vec![7]);
    }
}
