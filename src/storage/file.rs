//! File-backed storage.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::backend::StorageBackend;

/// Backend persisting each collection as a JSON document under a directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never leaves a truncated document behind. There is still no
/// coordination across keys: a crash between two writes to different keys
/// loses or duplicates exactly as much state as the in-browser original.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn write_atomically(path: &Path, value: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");

        let mut temp_file = File::create(&temp_path)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.sync_all()?;

        fs::rename(&temp_path, path)
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(error) = Self::write_atomically(&self.path_for(key), value) {
            warn!(key, error = %error, "failed to persist collection");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(error) = fs::remove_file(self.path_for(key)) {
            if error.kind() != io::ErrorKind::NotFound {
                warn!(key, error = %error, "failed to delete collection");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn file_storage_round_trips_values() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        storage.set("catalog", "[1,2,3]");

        assert_eq!(storage.get("catalog"), Some("[1,2,3]".to_string()));

        Ok(())
    }

    #[test]
    fn file_storage_missing_key_reads_none() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("missing"), None);

        Ok(())
    }

    #[test]
    fn file_storage_remove_deletes_document() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        storage.set("cart", "[]");
        storage.remove("cart");

        assert_eq!(storage.get("cart"), None);

        Ok(())
    }

    #[test]
    fn file_storage_remove_unknown_key_is_noop() -> TestResult {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::new(dir.path());

        storage.remove("never-written");

        Ok(())
    }

    #[test]
    fn file_storage_survives_reopening() -> TestResult {
        let dir = tempfile::tempdir()?;

        FileStorage::new(dir.path()).set("orders", "[{\"id\":\"1\"}]");

        let reopened = FileStorage::new(dir.path());

        assert_eq!(reopened.get("orders"), Some("[{\"id\":\"1\"}]".to_string()));

        Ok(())
    }
}
