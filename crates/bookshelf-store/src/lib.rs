//! bookshelf-store: storage layer for the bookshelf catalog
//!
//! This crate provides:
//! - `BookStore`, the owner of the authoritative ordered collection of books
//! - Monotonic id assignment (ids are never reused within a process)
//! - `StoreError` / `StoreResult` for storage failures
//!
//! # Architecture
//!
//! The store keeps every record in a single `Vec` behind a `std::sync::RwLock`.
//! Reads share the lock; mutations serialize on it, and each operation is
//! atomic as a whole, including the id mint inside `add`. Nothing is
//! persisted: the catalog lives and dies with the process.
//!
//! # Usage
//!
//! ```rust
//! use bookshelf_core::NewBook;
//! use bookshelf_store::BookStore;
//!
//! let store = BookStore::new();
//! let book = store.add(NewBook::new("1984", "George Orwell", 1949));
//! assert_eq!(store.get(book.id).unwrap(), book);
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::BookStore;

// Re-export bookshelf-core for downstream crates
pub use bookshelf_core;
