//! In-memory storage backend.
//!
//! Thread-safe and intended for embedded usage and tests.

use std::sync::RwLock;

use crate::book::ContactBook;
use crate::storage::traits::{BookStore, StorageError};

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

/// Keeps the last saved book in memory.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    saved: RwLock<Option<ContactBook>>,
}

impl InMemoryBookStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryBookStore {
    fn load(&self) -> Result<Option<ContactBook>, StorageError> {
        let saved = self.saved.read().map_err(|_| lock_err("book.load"))?;
        Ok(saved.clone())
    }

    fn save(&self, book: &ContactBook) -> Result<(), StorageError> {
        let mut saved = self.saved.write().map_err(|_| lock_err("book.save"))?;
        *saved = Some(book.clone());
        Ok(())
    }
}
