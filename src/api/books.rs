//! Book collection endpoints

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    error::{AppResult, ErrorResponse},
    models::book::{Book, BookPatch, BookRecord},
    AppState,
};

use super::{ApiJson, ApiPath};

/// List all books keyed by id
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books keyed by id", body = BTreeMap<i32, Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BTreeMap<i32, Book>>> {
    let books = state.services.books.list()?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = BookRecord),
        (status = 400, description = "Malformed book", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(book): ApiJson<Book>,
) -> AppResult<(StatusCode, Json<BookRecord>)> {
    let created = state.services.books.create(book)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id)?;
    Ok(Json(book))
}

/// Replace every field of a book
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed book", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn replace_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(book): ApiJson<Book>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.replace(id, book)?;
    Ok(Json(book))
}

/// Merge the supplied fields into a book
#[utoipa::path(
    patch,
    path = "/books/partial/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 422, description = "Patch could not be applied", body = ErrorResponse)
    )
)]
pub async fn partial_update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(patch): ApiJson<BookPatch>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.partial_update(id, &patch)?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Value>> {
    state.services.books.delete(id)?;
    Ok(Json(json!({})))
}
