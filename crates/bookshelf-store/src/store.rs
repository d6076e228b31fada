//! In-memory store implementation for the book catalog.
//!
//! `BookStore` owns the ordered collection and the id counter, both behind
//! a single `RwLock`. Reads share the lock; mutations serialize on it, so
//! every operation is atomic as a whole, including the id mint inside
//! `add`. No operation blocks on I/O or holds the lock across an await
//! point; everything runs to completion synchronously.

use std::sync::RwLock;

use bookshelf_core::{Book, BookId, NewBook};

use crate::error::{StoreError, StoreResult};

/// The locked contents: the ordered collection plus the id counter.
#[derive(Debug)]
struct Shelf {
    /// Books in insertion order. The order is externally observable
    /// through listing and pagination.
    books: Vec<Book>,
    /// Next id to mint. Incremented exactly once per `add`, independent
    /// of the collection size, so ids are never reused after a delete.
    next_id: u64,
}

impl Default for Shelf {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory store for the book catalog.
///
/// The single source of truth for resource state. Nothing is persisted:
/// the catalog lives and dies with the process.
#[derive(Debug, Default)]
pub struct BookStore {
    shelf: RwLock<Shelf>,
}

impl BookStore {
    /// Creates an empty store. The first `add` mints id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `catalog`, assigning ids
    /// sequentially from 1 in iteration order.
    #[must_use]
    pub fn with_catalog<I>(catalog: I) -> Self
    where
        I: IntoIterator<Item = NewBook>,
    {
        let store = Self::new();
        for fields in catalog {
            store.add(fields);
        }
        store
    }

    /// Returns every book in insertion order. No side effects.
    #[must_use]
    pub fn list(&self) -> Vec<Book> {
        let shelf = self.shelf.read().unwrap();
        shelf.books.clone()
    }

    /// Returns the book with the given id.
    pub fn get(&self, id: BookId) -> StoreResult<Book> {
        let shelf = self.shelf.read().unwrap();
        shelf
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(StoreError::BookNotFound(id))
    }

    /// Appends a new book, minting the next counter id, and returns it.
    ///
    /// Strictly appends; never overwrites an existing slot. The mint and
    /// the append happen under one write-lock acquisition, so concurrent
    /// adds cannot produce duplicate ids or lost records.
    pub fn add(&self, fields: NewBook) -> Book {
        let mut shelf = self.shelf.write().unwrap();
        let id = BookId::new(shelf.next_id);
        shelf.next_id += 1;
        let book = fields.into_book(id);
        shelf.books.push(book.clone());
        tracing::info!(id = %book.id, title = %book.title, "Added book");
        book
    }

    /// Overwrites the payload fields of the book with the given id as one
    /// atomic unit and returns the updated record. The id is immutable.
    ///
    /// An absent id is `BookNotFound`; replace never creates (not an
    /// upsert).
    pub fn replace(&self, id: BookId, fields: NewBook) -> StoreResult<Book> {
        let mut shelf = self.shelf.write().unwrap();
        let Some(book) = shelf.books.iter_mut().find(|book| book.id == id) else {
            return Err(StoreError::BookNotFound(id));
        };
        book.title = fields.title;
        book.author = fields.author;
        book.year = fields.year;
        let updated = book.clone();
        tracing::info!(id = %id, "Replaced book");
        Ok(updated)
    }

    /// Removes the book with the given id.
    ///
    /// Filters out every record with that id; the uniqueness invariant
    /// makes this exactly one. An absent id is `BookNotFound`.
    pub fn remove(&self, id: BookId) -> StoreResult<()> {
        let mut shelf = self.shelf.write().unwrap();
        let before = shelf.books.len();
        shelf.books.retain(|book| book.id != id);
        if shelf.books.len() == before {
            return Err(StoreError::BookNotFound(id));
        }
        tracing::info!(id = %id, "Removed book");
        Ok(())
    }

    /// Number of books currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shelf.read().unwrap().books.len()
    }

    /// Whether the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
