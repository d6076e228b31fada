//! bookshelf-core: domain types and payload validation for the book catalog
//!
//! This crate provides:
//! - The `Book` record and its `BookId` identity
//! - `NewBook`, the validated creation/replacement payload
//! - The payload shape check that turns loose JSON into a `NewBook`
//!
//! Everything here is pure: no I/O, no shared state, no async. The store and
//! HTTP layers build on these types.

pub mod types;
pub mod validate;

pub use types::{Book, BookId, NewBook};
pub use validate::{FieldIssue, ValidationError, parse_new_book};
