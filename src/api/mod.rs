//! API handlers for Circula REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod patrons;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{error::AppError, AppState};

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Books (catalog)
        .route("/books", get(books::list_books))
        .route("/books", post(books::create_book))
        .route("/books/:isbn", get(books::get_book))
        .route("/books/:isbn/availability", get(books::check_availability))
        // Patrons
        .route("/patrons", get(patrons::list_patrons))
        .route("/patrons", post(patrons::register_patron))
        .route("/patrons/:card_number", get(patrons::get_patron))
        // Loans
        .route("/loans", post(loans::create_loan))
        .route("/loans/return", post(loans::return_loan))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run `validator` checks on a request body, mapping failures to a 400.
pub(crate) fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
