//! # In-Memory Catalog Store
//!
//! A single insertion-ordered mapping from book id to [`Book`]. Keys are
//! unique; listing returns records in the order they were added. The store
//! lives for the process lifetime and holds no locks of its own - callers
//! wrap it in whatever guard their dispatch model needs.

use indexmap::IndexMap;

use super::book::{Book, Genre};
use super::errors::{CatalogError, CatalogResult};

/// The in-memory book store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: IndexMap<u32, Book>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the catalog pre-populated with the three seed records
    pub fn seed() -> Self {
        let mut catalog = Self::new();
        let seeds = [
            Book {
                id: 1,
                title: "The Hobbit".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                publication_year: 1937,
                genre: Genre::SciFi,
            },
            Book {
                id: 2,
                title: "The Lord of the Rings".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                publication_year: 1954,
                genre: Genre::Fantasy,
            },
            Book {
                id: 3,
                title: "The Return of the King".to_string(),
                author: "J.R.R. Tolkien".to_string(),
                publication_year: 1955,
                genre: Genre::Fantasy,
            },
        ];

        for book in seeds {
            // Seed ids are distinct, insertion cannot collide
            catalog
                .add(book)
                .expect("seed catalog contains duplicate ids");
        }

        catalog
    }

    /// Insert a record keyed by its own id.
    ///
    /// Rejects an id that is already present; the existing record is left
    /// untouched.
    pub fn add(&mut self, book: Book) -> CatalogResult<()> {
        if self.books.contains_key(&book.id) {
            return Err(CatalogError::DuplicateId { id: book.id });
        }
        self.books.insert(book.id, book);
        Ok(())
    }

    /// All records, in insertion order.
    pub fn list(&self) -> &IndexMap<u32, Book> {
        &self.books
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.get(&id)
    }

    /// Replace the record at `id` with `book`, returning the stored record.
    ///
    /// The path id wins: the stored record carries `id` regardless of the
    /// id field in the payload. A missing id is an error, never an upsert.
    pub fn update(&mut self, id: u32, book: Book) -> CatalogResult<Book> {
        let slot = self
            .books
            .get_mut(&id)
            .ok_or(CatalogError::NotFound { id })?;
        *slot = Book { id, ..book };
        Ok(slot.clone())
    }

    /// Remove the record at `id`.
    ///
    /// Uses a shifting removal so the insertion order of the remaining
    /// records is preserved.
    pub fn delete(&mut self, id: u32) -> CatalogResult<Book> {
        self.books
            .shift_remove(&id)
            .ok_or(CatalogError::NotFound { id })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
