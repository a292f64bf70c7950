//! Filesystem storage rooted at a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{Document, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Default extension of source documents.
const DEFAULT_EXTENSION: &str = "md";

/// Filesystem storage.
///
/// Scans `root` recursively for files with the configured extension,
/// skipping hidden files and directories. Writes create any missing parent
/// directories.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
    extension: String,
}

impl FsStorage {
    /// Create a storage rooted at `root`, scanning for `.md` files.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }

    /// Scan for files with a different extension (without the leading dot).
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Root directory of this storage.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reject absolute paths and paths that climb out of the root.
    fn validate_path(path: &str) -> Result<(), StorageError> {
        let invalid = path.is_empty()
            || path.starts_with('/')
            || path.split('/').any(|part| part == ".." || part.is_empty());
        if invalid {
            return Err(StorageError::new(StorageErrorKind::InvalidPath, BACKEND).with_path(path));
        }
        Ok(())
    }

    fn full_path(&self, path: &str) -> PathBuf {
        path.split('/')
            .fold(self.root.clone(), |full, part| full.join(part))
    }

    fn scan_directory(
        &self,
        dir: &Path,
        prefix: &str,
        documents: &mut Vec<Document>,
    ) -> Result<(), StorageError> {
        let entries = fs::read_dir(dir)
            .map_err(|e| StorageError::io(e, BACKEND, dir))?;

        for entry in entries {
            let entry = entry
                .map_err(|e| StorageError::io(e, BACKEND, dir))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let rel = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            let path = entry.path();

            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                self.scan_directory(&path, &rel, documents)?;
            } else if path.extension().is_some_and(|e| e == self.extension.as_str()) {
                documents.push(Document::new(rel));
            }
        }
        Ok(())
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        let mut documents = Vec::new();
        if self.root.is_dir() {
            self.scan_directory(&self.root, "", &mut documents)?;
        }
        documents.sort();
        tracing::debug!(
            root = %self.root.display(),
            documents = documents.len(),
            "Scanned source directory"
        );
        Ok(documents)
    }

    fn read(&self, path: &str) -> Result<String, StorageError> {
        Self::validate_path(path)?;
        fs::read_to_string(self.full_path(path))
            .map_err(|e| StorageError::io(e, BACKEND, path))
    }

    fn write(&self, path: &str, content: &str) -> Result<(), StorageError> {
        Self::validate_path(path)?;
        let full_path = self.full_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::io(e, BACKEND, path))?;
        }
        fs::write(&full_path, content)
            .map_err(|e| StorageError::io(e, BACKEND, path))?;
        tracing::trace!(path, bytes = content.len(), "Wrote file");
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        Self::validate_path(path).is_ok() && self.full_path(path).is_file()
    }
}
