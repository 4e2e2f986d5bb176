//! Error types for Circula server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::registry::RegistryError;

/// Stable application error codes surfaced to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchPatron = 2,
    NoSuchBook = 3,
    BookNotAvailable = 4,
    DuplicateIsbn = 5,
    DuplicateCard = 6,
    NotBorrowedByPatron = 7,
    BadValue = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Registry(err) => {
                let (status, code) = match err {
                    RegistryError::BookNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook),
                    RegistryError::PatronNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchPatron),
                    RegistryError::DuplicateIsbn(_) => (StatusCode::CONFLICT, ErrorCode::DuplicateIsbn),
                    RegistryError::DuplicateCard(_) => (StatusCode::CONFLICT, ErrorCode::DuplicateCard),
                    RegistryError::AlreadyBorrowed(_) => (StatusCode::CONFLICT, ErrorCode::BookNotAvailable),
                    RegistryError::NotBorrowedByPatron { .. } => {
                        (StatusCode::CONFLICT, ErrorCode::NotBorrowedByPatron)
                    }
                };
                (status, code, err.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
