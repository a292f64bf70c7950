//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::storage::{Document, Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Keeps files in memory, keyed by path. Every path passed to
/// [`with_file`](Self::with_file) or [`Storage::write`] becomes a file;
/// [`Storage::scan`] lists them all in path order.
///
/// # Example
///
/// ```ignore
/// use sefer_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new().with_file("soup.md", "# Soup\nHot.");
///
/// let docs = storage.scan().unwrap();
/// let content = storage.read("soup.md").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<BTreeMap<String, String>>,
    fail_writes: RwLock<bool>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Make every subsequent write fail with [`StorageErrorKind::PermissionDenied`].
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failing_writes(self) -> Self {
        *self.fail_writes.write().unwrap() = true;
        self
    }

    /// Content currently stored at `path`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// All stored paths, sorted.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.files.read().unwrap().keys().cloned().collect()
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        Ok(self
            .files
            .read()
            .unwrap()
            .keys()
            .map(Document::new)
            .collect())
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        self.get(path).ok_or_else(|| {
            StorageError::new(StorageErrorKind::NotFound, BACKEND).with_path(path)
        })
    }

    fn write(&self, path: &str, content: &str) -> Result<(), StorageError> {
        if *self.fail_writes.read().unwrap() {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied, BACKEND).with_path(path));
        }
        self.files
            .write()
            .unwrap()
            .insert(path.to_owned(), content.to_owned());
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(MockStorage: Send, Sync);

    #[test]
    fn test_new_empty() {
        let storage = MockStorage::new();
        assert!(storage.scan().unwrap().is_empty());
        assert!(storage.paths().is_empty());
    }

    #[test]
    fn test_with_file() {
        let storage = MockStorage::new()
            .with_file("soup.md", "# Soup")
            .with_file("desserts/cake.md", "# Cake");

        let docs = storage.scan().unwrap();
        assert_eq!(
            docs,
            vec![Document::new("desserts/cake.md"), Document::new("soup.md")]
        );
        assert_eq!(storage.read("soup.md").unwrap(), "# Soup");
    }

    #[test]
    fn test_read_missing() {
        let storage = MockStorage::new();
        let err = storage.read("missing.md").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.to_string(), "[Mock] missing.md: not found");
    }

    #[test]
    fn test_write_then_read() {
        let storage = MockStorage::new();
        storage.write("soup.html", "<h1>Soup</h1>").unwrap();

        assert!(storage.exists("soup.html"));
        assert_eq!(storage.get("soup.html").as_deref(), Some("<h1>Soup</h1>"));
        assert_eq!(storage.paths(), vec!["soup.html"]);
    }

    #[test]
    fn test_failing_writes() {
        let storage = MockStorage::new().with_failing_writes();
        let err = storage.write("soup.html", "x").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert!(!storage.exists("soup.html"));
    }
}
