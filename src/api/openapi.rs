//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, patrons};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Circula API",
        version = "0.1.0",
        description = "Single-branch library lending REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::check_availability,
        // Patrons
        patrons::list_patrons,
        patrons::get_patron,
        patrons::register_patron,
        // Loans
        loans::create_loan,
        loans::return_loan,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookView,
            crate::models::book::Availability,
            books::CreateBookRequest,
            books::BookListResponse,
            // Patrons
            crate::models::patron::Patron,
            crate::models::patron::PatronView,
            patrons::RegisterPatronRequest,
            patrons::PatronListResponse,
            // Loans
            loans::LoanRequest,
            loans::LoanResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "patrons", description = "Patron management"),
        (name = "loans", description = "Borrow and return")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
