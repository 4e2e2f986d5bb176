//! Patron endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::AppResult, models::PatronView};

use super::validate_request;

/// Register patron request
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterPatronRequest {
    /// Patron display name
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// Card number, the patron's unique key
    #[validate(length(min = 1, message = "Card number must not be empty"))]
    pub card_number: String,
}

/// Patron listing response
#[derive(Serialize, ToSchema)]
pub struct PatronListResponse {
    /// Patrons in registration order
    pub patrons: Vec<PatronView>,
    /// Number of patrons returned
    pub total: usize,
}

/// List all registered patrons with their current loans
#[utoipa::path(
    get,
    path = "/patrons",
    tag = "patrons",
    responses(
        (status = 200, description = "Patrons in registration order", body = PatronListResponse)
    )
)]
pub async fn list_patrons(State(state): State<crate::AppState>) -> Json<PatronListResponse> {
    let patrons = state.services.patrons.list_patrons().await;
    let total = patrons.len();
    Json(PatronListResponse { patrons, total })
}

/// Get a patron by card number
#[utoipa::path(
    get,
    path = "/patrons/{card_number}",
    tag = "patrons",
    params(
        ("card_number" = String, Path, description = "Patron card number")
    ),
    responses(
        (status = 200, description = "Patron with current loans", body = PatronView),
        (status = 404, description = "Patron not found")
    )
)]
pub async fn get_patron(
    State(state): State<crate::AppState>,
    Path(card_number): Path<String>,
) -> AppResult<Json<PatronView>> {
    let patron = state.services.patrons.get_patron(&card_number).await?;
    Ok(Json(patron))
}

/// Register a new patron
#[utoipa::path(
    post,
    path = "/patrons",
    tag = "patrons",
    request_body = RegisterPatronRequest,
    responses(
        (status = 201, description = "Patron registered", body = PatronView),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Card number already in use")
    )
)]
pub async fn register_patron(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterPatronRequest>,
) -> AppResult<(StatusCode, Json<PatronView>)> {
    validate_request(&request)?;

    let patron = state
        .services
        .patrons
        .register_patron(&request.name, &request.card_number)
        .await?;
    Ok((StatusCode::CREATED, Json(patron)))
}
