//! Loan management service
//!
//! Borrow and return mutate the lending relation, so both take the write
//! lock for the full operation.

use crate::{error::AppResult, models::BookView};

use super::SharedRegistry;

#[derive(Clone)]
pub struct LoansService {
    registry: SharedRegistry,
}

impl LoansService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Lend a book to a patron
    pub async fn borrow(&self, isbn: &str, card_number: &str) -> AppResult<BookView> {
        let mut registry = self.registry.write().await;
        let (book, patron) = registry.borrow(isbn, card_number)?;
        let view = BookView::render(book, Some(&patron.name));
        tracing::info!("Lent \"{}\" to {} (card {})", book.title, patron.name, card_number);
        Ok(view)
    }

    /// Accept a returned book
    pub async fn return_book(&self, isbn: &str, card_number: &str) -> AppResult<BookView> {
        let mut registry = self.registry.write().await;
        let (book, patron) = registry.return_book(isbn, card_number)?;
        let view = BookView::render(book, None);
        tracing::info!("{} (card {}) returned \"{}\"", patron.name, card_number, book.title);
        Ok(view)
    }
}
