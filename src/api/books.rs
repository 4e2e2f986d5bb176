//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{Availability, BookView},
};

use super::validate_request;

/// Create book request
#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    /// Book title
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    /// Author display name
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    /// ISBN, the book's unique key
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
}

/// Catalog listing query
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive title substring filter
    pub title: Option<String>,
}

/// Catalog listing response
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    /// Books in catalog order
    pub books: Vec<BookView>,
    /// Number of books returned
    pub total: usize,
}

/// List the catalog, optionally filtered by title substring
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books in catalog order", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> Json<BookListResponse> {
    let books = state.services.catalog.list_books(query.title.as_deref()).await;
    let total = books.len();
    Json(BookListResponse { books, total })
}

/// Get book details by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = BookView),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookView>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(book))
}

/// Add a book to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book added", body = BookView),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "ISBN already catalogued")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookView>)> {
    validate_request(&request)?;

    let book = state
        .services
        .catalog
        .add_book(&request.title, &request.author, &request.isbn)
        .await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Check whether a book can be borrowed
#[utoipa::path(
    get,
    path = "/books/{isbn}/availability",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Availability, with borrower name when on loan", body = Availability),
        (status = 404, description = "Book not found")
    )
)]
pub async fn check_availability(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Availability>> {
    let availability = state.services.catalog.check_availability(&isbn).await?;
    Ok(Json(availability))
}
