//! Document loading and writing for sefer.
//!
//! The parsing engine never touches the filesystem itself. Sources are
//! listed and read, and rendered pages written, through the [`Storage`]
//! trait. This enables:
//!
//! - **Unit testing** of site builds without a real filesystem
//! - **Separate source and output locations** (two storages)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `scan()`, `read()`, `write()` and `exists()` methods
//! - [`FsStorage`] implementation rooted at a directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use sefer_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("recipes"));
//! for doc in storage.scan()? {
//!     let text = storage.read(&doc.path)?;
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Document, Storage, StorageError, StorageErrorKind};
