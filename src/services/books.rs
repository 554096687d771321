//! Book collection service

use std::collections::BTreeMap;

use crate::{
    error::AppResult,
    models::book::{Book, BookPatch, BookRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> AppResult<BTreeMap<i32, Book>> {
        tracing::debug!("Get all books...");
        self.repository.books.list()
    }

    pub fn create(&self, book: Book) -> AppResult<BookRecord> {
        tracing::debug!("Creating a new book...");
        let record = self.repository.books.create(book)?;
        tracing::info!(id = record.id, title = %record.book.title, "Book created");
        Ok(record)
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        tracing::debug!(id, "Getting a book...");
        self.repository.books.get_by_id(id)
    }

    /// Full update: every stored field is overwritten
    pub fn replace(&self, id: i32, book: Book) -> AppResult<Book> {
        tracing::debug!(id, "Updating a book...");
        self.repository.books.replace(id, book)
    }

    /// Merge update: only fields present in the patch are written
    pub fn partial_update(&self, id: i32, patch: &BookPatch) -> AppResult<Book> {
        tracing::debug!(id, "Partial updating a book...");
        if patch.is_empty() {
            return self.repository.books.get_by_id(id);
        }
        self.repository.books.patch(id, patch)
    }

    pub fn delete(&self, id: i32) -> AppResult<()> {
        tracing::debug!(id, "Deleting a book...");
        self.repository.books.delete(id)?;
        tracing::info!(id, "Book deleted");
        Ok(())
    }

    /// Number of stored books (for readiness)
    pub fn count(&self) -> AppResult<usize> {
        self.repository.books.count()
    }
}
