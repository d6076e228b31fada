//! Core data types for the bookshelf catalog.
//!
//! A catalog record is a `Book`: an identity assigned by the store plus
//! three caller-supplied payload fields. `NewBook` is the payload alone,
//! produced by validation and consumed by create/replace.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier for a book in the catalog.
///
/// Wraps the integer minted by the store, providing type safety to
/// distinguish book ids from the other integers in the system (page
/// numbers, years). Ids are assigned from a monotonic counter and are
/// never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl BookId {
    /// Creates a BookId from a raw integer.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Records
// ============================================================================

/// A single catalog record.
///
/// Serializes to the wire shape
/// `{"id": int, "title": string, "author": string, "year": int}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identity assigned by the store on creation; immutable afterwards.
    pub id: BookId,
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// Year of publication. Any value is accepted; there is no range check.
    pub year: i32,
}

/// The validated payload for creating or replacing a book.
///
/// Carries everything a `Book` has except the id, which only the store
/// mints. Replace overwrites all three fields as one unit; there is no
/// partial-field update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// Year of publication.
    pub year: i32,
}

impl NewBook {
    /// Creates a payload from its parts.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Attaches an identity, producing the full record.
    #[must_use]
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_serializes_transparently() {
        let id = BookId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: BookId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_book_id_display_and_from_str() {
        let id = BookId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!("7".parse::<BookId>().unwrap(), id);
        assert!("seven".parse::<BookId>().is_err());
    }

    #[test]
    fn test_book_wire_shape() {
        let book = Book {
            id: BookId::new(1),
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "1984",
                "author": "George Orwell",
                "year": 1949,
            })
        );
    }

    #[test]
    fn test_book_round_trip() {
        let book = Book {
            id: BookId::new(3),
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            year: 1925,
        };
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn test_new_book_into_book_keeps_fields() {
        let draft = NewBook::new("To Kill a Mockingbird", "Harper Lee", 1960);
        let book = draft.clone().into_book(BookId::new(2));
        assert_eq!(book.id, BookId::new(2));
        assert_eq!(book.title, draft.title);
        assert_eq!(book.author, draft.author);
        assert_eq!(book.year, draft.year);
    }
}
