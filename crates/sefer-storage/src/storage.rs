//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for listing, reading and writing
//! documents, along with [`StorageError`] for unified error handling across
//! backends.
//!
//! # Path Convention
//!
//! All path parameters are relative, `/`-separated identifiers:
//! - `"soup.md"` - document at the root
//! - `"desserts/cake.md"` - nested document
//!
//! Storage implementations map these to their internal layout.

use std::path::PathBuf;

/// A source document found by [`Storage::scan`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Document {
    /// Relative path (e.g., "soup.md", "desserts/cake.md").
    pub path: String,
}

impl Document {
    /// Create a document reference.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// What went wrong, independent of the backend.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// No document or directory at the path.
    NotFound,
    /// The backend refused access.
    PermissionDenied,
    /// Path is absolute, empty, or escapes the storage root.
    InvalidPath,
    /// Content is not valid UTF-8.
    InvalidData,
    /// Any other I/O failure.
    Other,
}

impl StorageErrorKind {
    fn from_io(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::InvalidData => Self::InvalidData,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::InvalidPath => "invalid path",
            Self::InvalidData => "not valid UTF-8",
            Self::Other => "I/O error",
        })
    }
}

/// Error raised by a [`Storage`] backend.
///
/// Displays as `[Backend] path: kind (cause)`, leaving out the parts that
/// are absent.
#[derive(Debug)]
pub struct StorageError {
    /// Backend-independent category.
    pub kind: StorageErrorKind,
    /// Backend that raised the error (e.g., "Fs", "Mock").
    pub backend: &'static str,
    /// Document or directory the operation touched.
    pub path: Option<PathBuf>,
    source: Option<std::io::Error>,
}

impl StorageError {
    /// Error without a path or cause.
    #[must_use]
    pub fn new(kind: StorageErrorKind, backend: &'static str) -> Self {
        Self {
            kind,
            backend,
            path: None,
            source: None,
        }
    }

    /// Attach the path the failed operation was about.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Wrap an I/O failure on `path`, keeping it as the error source.
    #[must_use]
    pub fn io(err: std::io::Error, backend: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: StorageErrorKind::from_io(err.kind()),
            backend,
            path: Some(path.into()),
            source: Some(err),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] ", self.backend)?;
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }
        write!(f, "{}", self.kind)?;
        if let Some(source) = &self.source {
            write!(f, " ({source})")?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for document listing, reading and writing.
///
/// Reads are whole-document: a source is opened, read fully and released
/// before parsing starts.
pub trait Storage: Send + Sync {
    /// List all source documents, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if listing fails (e.g., permission denied).
    fn scan(&self) -> Result<Vec<Document>, StorageError>;

    /// Read a document's full text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the document doesn't exist or can't be read.
    fn read(&self, path: &str) -> Result<String, StorageError>;

    /// Write content to a path, creating intermediate locations as needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the content can't be written.
    fn write(&self, path: &str, content: &str) -> Result<(), StorageError>;

    /// Check if a document exists at the given path.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &str) -> bool;
}
