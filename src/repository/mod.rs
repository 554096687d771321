//! Repository layer: the in-memory book store

pub mod books;

/// Main repository struct holding every store the server owns
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }

    /// Create a repository pre-filled with the sample books
    pub fn seeded() -> Self {
        Self {
            books: books::BooksRepository::with_books(books::SEED_BOOKS.iter().cloned()),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
