//! Abstract storage trait for address books.
//!
//! Backends only load and save whole books; the model never talks to
//! storage mid-mutation, so a save always sees a complete snapshot.

use std::path::PathBuf;

use thiserror::Error;

use crate::book::ContactBook;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend error.
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Storage for a whole address book.
pub trait BookStore: Send + Sync {
    /// Loads the stored book, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<ContactBook>, StorageError>;

    /// Replaces the stored book.
    fn save(&self, book: &ContactBook) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: ensure the trait is object-safe
    fn _assert_book_store_object_safe(_: &dyn BookStore) {}

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Io {
            path: PathBuf::from("data/addressbook.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("addressbook.json"));
        assert!(msg.contains("denied"));

        let err = StorageError::Serialization("expected value".to_string());
        assert!(err.to_string().contains("expected value"));
    }
}
