//! Best-effort persistent key-value storage.
//!
//! Converts an unreliable backing store into a total interface: reads fall
//! back to a caller-supplied default and writes log a warning instead of
//! failing. Cart or wishlist loss on a broken disk is an accepted
//! limitation.

use std::{fs, io::ErrorKind, path::PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// File-backed key-value store rooted at a data directory.
///
/// Each key is stored as `<root>/<key>.json`. No operation ever returns an
/// error to its caller.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `fallback` when the key is absent, unreadable, or does not
    /// deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Ok(bytes) = fs::read(self.path_for(key)) else {
            return fallback;
        };

        serde_json::from_slice(&bytes).unwrap_or(fallback)
    }

    /// Serialize `value` and write it under `key`, swallowing failures.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_vec(value) {
            Ok(json) => json,
            Err(err) => {
                warn!("failed to serialize {key} for storage: {err}");
                return;
            }
        };

        if let Err(err) = fs::create_dir_all(&self.root) {
            warn!("failed to create storage directory: {err}");
            return;
        }

        if let Err(err) = fs::write(self.path_for(key), json) {
            warn!("failed to save {key} to storage: {err}");
        }
    }

    /// Delete the value stored under `key`, if any.
    pub fn remove(&self, key: &str) {
        if let Err(err) = fs::remove_file(self.path_for(key)) {
            if err.kind() != ErrorKind::NotFound {
                warn!("failed to remove {key} from storage: {err}");
            }
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn get_missing_key_returns_fallback() -> TestResult {
        let dir = TempDir::new()?;
        let storage = Storage::new(dir.path());

        let value: Vec<String> = storage.get("cart", vec!["fallback".to_string()]);

        assert_eq!(value, vec!["fallback".to_string()]);

        Ok(())
    }

    #[test]
    fn set_then_get_round_trips() -> TestResult {
        let dir = TempDir::new()?;
        let storage = Storage::new(dir.path());

        storage.set("cart", &vec![1_u64, 2, 3]);

        let value: Vec<u64> = storage.get("cart", Vec::new());

        assert_eq!(value, vec![1, 2, 3]);

        Ok(())
    }

    #[test]
    fn get_corrupt_value_returns_fallback() -> TestResult {
        let dir = TempDir::new()?;
        let storage = Storage::new(dir.path());

        fs::write(dir.path().join("cart.json"), b"not json at all")?;

        let value: Vec<u64> = storage.get("cart", vec![99]);

        assert_eq!(value, vec![99]);

        Ok(())
    }

    #[test]
    fn remove_deletes_the_value() -> TestResult {
        let dir = TempDir::new()?;
        let storage = Storage::new(dir.path());

        storage.set("theme", &"dark");
        storage.remove("theme");

        let value: String = storage.get("theme", "light".to_string());

        assert_eq!(value, "light");

        Ok(())
    }

    #[test]
    fn remove_missing_key_is_a_noop() -> TestResult {
        let dir = TempDir::new()?;
        let storage = Storage::new(dir.path());

        storage.remove("never-written");

        Ok(())
    }

    #[test]
    fn set_on_unwritable_root_is_swallowed() -> TestResult {
        let dir = TempDir::new()?;
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"a plain file where the root should be")?;

        // The root path is an existing file, so every write must fail.
        let storage = Storage::new(&blocker);

        storage.set("cart", &vec![1_u64]);

        let value: Vec<u64> = storage.get("cart", Vec::new());

        assert!(value.is_empty());

        Ok(())
    }
}
