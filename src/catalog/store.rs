use super::types::Book;
use crate::error::StoreError;

use std::path::Path;

/// Immutable, ordered snapshot of every book known to the service.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Loads the store from a JSON array of books.
    ///
    /// Never fails: a read or parse error is logged and an empty store is
    /// returned instead, so the service can start regardless.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                tracing::info!("Books loaded successfully, total books: {}", store.len());
                store
            }
            Err(e) => {
                tracing::error!("Error loading books from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let books: Vec<Book> = serde_json::from_str(&raw)?;
        Ok(Self { books })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
