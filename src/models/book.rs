//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalogued book, keyed by ISBN.
///
/// The lending relation has a single source of truth: `borrowed_by` holds
/// the card number of the current borrower, or `None` when the copy sits on
/// the shelf. Availability is derived from it, never stored separately.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Card number of the current borrower, if on loan
    pub borrowed_by: Option<String>,
}

impl Book {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            borrowed_by: None,
        }
    }

    /// A book is available iff no borrower is recorded
    pub fn is_available(&self) -> bool {
        self.borrowed_by.is_none()
    }
}

/// Availability of a book as reported by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability {
    Available,
    OnLoan {
        /// Display name of the current borrower
        borrower: String,
    },
}

/// Book with rendered status for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookView {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
    /// "available" or "on loan to <borrower>"
    pub status: String,
}

impl BookView {
    /// Render a book the way the circulation desk prints it.
    /// `borrower_name` is the display name matching `book.borrowed_by`.
    pub fn render(book: &Book, borrower_name: Option<&str>) -> Self {
        let status = match borrower_name {
            Some(name) => format!("on loan to {}", name),
            None => "available".to_string(),
        };
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            available: book.is_available(),
            status,
        }
    }
}
