//! Book catalog routes.
//!
//! This module implements the book-related HTTP endpoints:
//! - GET /api/books - List books, paginated
//! - POST /api/books - Add a new book
//! - GET /api/books/{id} - Fetch one book
//! - PUT /api/books/{id} - Replace an existing book
//! - DELETE /api/books/{id} - Remove a book
//!
//! Every route takes `RequireApiKey` as its first extractor, so a request
//! with a bad credential is rejected before the handler body runs.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use bookshelf_core::{Book, BookId, parse_new_book};
use bookshelf_store::StoreError;

use crate::auth::RequireApiKey;
use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for GET /api/books.
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    /// 1-based page number. Page 0 is treated as page 1.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of books per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    2
}

/// Response for DELETE /api/books/{id}.
#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    /// Confirmation message.
    pub message: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Cut one page out of the full catalog.
///
/// Pages are 1-based; page 0 means page 1. A page past the end of the
/// catalog, or a `per_page` of 0, yields an empty page rather than an
/// error. Arithmetic saturates so absurd page numbers cannot overflow.
fn paginate(books: Vec<Book>, page: u64, per_page: u64) -> Vec<Book> {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let count = usize::try_from(per_page).unwrap_or(usize::MAX);

    books.into_iter().skip(start).take(count).collect()
}

/// 404 for an id that is not in the catalog.
fn book_not_found(id: BookId) -> ApiError {
    tracing::error!(%id, "Book not found");
    ApiError::NotFound(format!("Book {} not found", id))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/books - List books, paginated.
///
/// Returns one page of the catalog as a bare JSON array, in insertion
/// order. Listing never mutates the catalog.
///
/// # Query Parameters
///
/// - `page`: 1-based page number (default 1)
/// - `per_page`: books per page (default 2)
///
/// # Response
///
/// - 200 OK: `[ { "id": 1, "title": "...", "author": "...", "year": ... }, ... ]`
/// - 400 Bad Request: Non-integer or negative query parameters
/// - 401 Unauthorized: Invalid or missing API key
async fn list_books(
    _auth: RequireApiKey,
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> ApiResult<Json<Vec<Book>>> {
    let books = state.store().list();
    let page = paginate(books, query.page, query.per_page);

    tracing::info!(
        page = query.page,
        per_page = query.per_page,
        count = page.len(),
        "Listed books"
    );

    Ok(Json(page))
}

/// GET /api/books/{id} - Fetch one book.
///
/// # Response
///
/// - 200 OK: `{ "id": ..., "title": "...", "author": "...", "year": ... }`
/// - 401 Unauthorized: Invalid or missing API key
/// - 404 Not Found: No book with this id
async fn get_book(
    _auth: RequireApiKey,
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> ApiResult<Json<Book>> {
    let book = state.store().get(id).map_err(|e| match e {
        StoreError::BookNotFound(id) => book_not_found(id),
    })?;

    Ok(Json(book))
}

/// POST /api/books - Add a new book.
///
/// Validates the payload shape, then mints a fresh id and appends the
/// book to the catalog. The caller cannot choose the id; any `id` field
/// in the payload is ignored.
///
/// # Request
///
/// Body: `{ "title": "...", "author": "...", "year": ... }`
///
/// # Response
///
/// - 201 Created: the full book record, id included
/// - 400 Bad Request: Malformed JSON or invalid payload shape
/// - 401 Unauthorized: Invalid or missing API key
async fn add_book(
    _auth: RequireApiKey,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Value>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let fields = parse_new_book(&payload).map_err(|e| {
        tracing::error!(error = %e, "Rejected invalid book payload");
        ApiError::Validation(e)
    })?;

    let book = state.store().add(fields);

    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /api/books/{id} - Replace an existing book.
///
/// Overwrites all three payload fields of the identified book in one
/// step; the id never changes. Existence is checked before the payload
/// shape, so an unknown id is a 404 even when the body is invalid.
/// There is no upsert: replacing a missing book never creates one.
///
/// # Request
///
/// Body: `{ "title": "...", "author": "...", "year": ... }`
///
/// # Response
///
/// - 200 OK: the updated book record
/// - 400 Bad Request: Malformed JSON or invalid payload shape
/// - 401 Unauthorized: Invalid or missing API key
/// - 404 Not Found: No book with this id
async fn update_book(
    _auth: RequireApiKey,
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    JsonBody(payload): JsonBody<Value>,
) -> ApiResult<Json<Book>> {
    state.store().get(id).map_err(|e| match e {
        StoreError::BookNotFound(id) => book_not_found(id),
    })?;

    let fields = parse_new_book(&payload).map_err(|e| {
        tracing::error!(error = %e, "Rejected invalid book payload");
        ApiError::Validation(e)
    })?;

    let book = state.store().replace(id, fields).map_err(|e| match e {
        StoreError::BookNotFound(id) => book_not_found(id),
    })?;

    Ok(Json(book))
}

/// DELETE /api/books/{id} - Remove a book.
///
/// The removed book's id is retired for the life of the process; later
/// creates keep counting upward and never reuse it.
///
/// # Response
///
/// - 200 OK: `{ "message": "Book deleted" }`
/// - 401 Unauthorized: Invalid or missing API key
/// - 404 Not Found: No book with this id
async fn delete_book(
    _auth: RequireApiKey,
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> ApiResult<Json<DeleteBookResponse>> {
    state.store().remove(id).map_err(|e| match e {
        StoreError::BookNotFound(id) => book_not_found(id),
    })?;

    Ok(Json(DeleteBookResponse {
        message: "Book deleted".to_string(),
    }))
}

/// Build book catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(list_books).post(add_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}

// ============================================================================
// Tests
// ============================================================================
