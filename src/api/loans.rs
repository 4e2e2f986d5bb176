//! Loan (borrow/return) endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, models::BookView};

use super::validate_request;

/// Borrow or return request
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    /// ISBN of the book
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
    /// Card number of the patron
    #[validate(length(min = 1, message = "Card number must not be empty"))]
    pub card_number: String,
}

/// Loan response with the book's new state
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    /// Status message
    pub message: String,
    /// The book after the operation
    pub book: BookView,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Book lent", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Book or patron not found"),
        (status = 409, description = "Book already on loan")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    validate_request(&request)?;

    let book = state
        .services
        .loans
        .borrow(&request.isbn, &request.card_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanResponse {
            message: "Book borrowed successfully".to_string(),
            book,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = LoanResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Book or patron not found"),
        (status = 409, description = "Book not on loan to this patron")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<LoanRequest>,
) -> AppResult<Json<LoanResponse>> {
    validate_request(&request)?;

    let book = state
        .services
        .loans
        .return_book(&request.isbn, &request.card_number)
        .await?;

    Ok(Json(LoanResponse {
        message: "Book returned successfully".to_string(),
        book,
    }))
}
