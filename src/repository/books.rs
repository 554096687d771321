//! Book store

use once_cell::sync::Lazy;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPatch, BookRecord},
};

/// Sample collection loaded when `store.seed` is enabled
pub static SEED_BOOKS: Lazy<Vec<BookRecord>> = Lazy::new(|| {
    let rows: [(&str, &str, &str, &str, i32, &str); 6] = [
        ("Richard Montes", "William Clark", "Mcneil, Hall and Duke", "2022-11-12", 135, "Albanian"),
        ("Steven Owen", "Christopher Smith", "Anderson, Stewart and Cooper", "1991-08-18", 248, "Tibetan"),
        ("Lorraine Gonzalez", "Michael Thornton", "Allen, Kennedy and Brady", "2020-07-31", 139, "Malagasy"),
        ("Candace Burns", "Roger Hill", "Hudson LLC", "1992-07-08", 102, "Tigrinya"),
        ("Paul Howard MD", "Lucas Brooks", "Cohen, Logan and Carter", "1970-07-20", 187, "Kashmiri"),
        ("Matthew Carey", "Michael Joseph", "Reid, Gilbert and Padilla", "2014-07-12", 139, "Bihari languages"),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((title, author, publisher, publisher_date, page_count, language), id)| BookRecord {
            id,
            book: Book {
                title: title.to_string(),
                author: author.to_string(),
                publisher: publisher.to_string(),
                publisher_date: publisher_date.to_string(),
                page_count,
                language: language.to_string(),
            },
        })
        .collect()
});

#[derive(Debug)]
struct BookTable {
    rows: BTreeMap<i32, Book>,
    /// Next id to hand out; only ever grows. `None` once ids are exhausted
    next_id: Option<i32>,
}

/// Mutex-guarded id → book map shared by every handler
#[derive(Clone)]
pub struct BooksRepository {
    table: Arc<Mutex<BookTable>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::with_books(std::iter::empty())
    }

    /// Build a store holding `records`; new ids start after the highest one
    pub fn with_books(records: impl IntoIterator<Item = BookRecord>) -> Self {
        let rows: BTreeMap<i32, Book> = records.into_iter().map(|r| (r.id, r.book)).collect();
        let next_id = match rows.keys().next_back() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };

        Self {
            table: Arc::new(Mutex::new(BookTable { rows, next_id })),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, BookTable>> {
        self.table
            .lock()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// All books keyed by id
    pub fn list(&self) -> AppResult<BTreeMap<i32, Book>> {
        Ok(self.lock()?.rows.clone())
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.lock()?.rows.len())
    }

    pub fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.lock()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    pub fn create(&self, book: Book) -> AppResult<BookRecord> {
        let mut table = self.lock()?;
        let id = table
            .next_id
            .ok_or_else(|| AppError::Internal("book ids exhausted".to_string()))?;
        table.next_id = id.checked_add(1);
        table.rows.insert(id, book.clone());
        Ok(BookRecord { id, book })
    }

    /// Overwrite every field of an existing book
    pub fn replace(&self, id: i32, book: Book) -> AppResult<Book> {
        let mut table = self.lock()?;
        let slot = table.rows.get_mut(&id).ok_or(AppError::NotFound(id))?;
        *slot = book;
        Ok(slot.clone())
    }

    /// Merge a patch into an existing book under a single lock
    pub fn patch(&self, id: i32, patch: &BookPatch) -> AppResult<Book> {
        let mut table = self.lock()?;
        let slot = table.rows.get_mut(&id).ok_or(AppError::NotFound(id))?;
        let merged = patch.apply(slot).map_err(|e| AppError::UpdateFailed {
            id,
            reason: e.to_string(),
        })?;
        *slot = merged;
        Ok(slot.clone())
    }

    pub fn delete(&self, id: i32) -> AppResult<()> {
        self.lock()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}
