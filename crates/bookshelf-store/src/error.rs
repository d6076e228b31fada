//! Error types for the storage layer.

use bookshelf_core::BookId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No book with the given id is currently held.
    #[error("book not found: {0}")]
    BookNotFound(BookId),
}
