//! Catalog management service

use crate::{
    error::AppResult,
    models::{Availability, BookView},
    registry::RegistryError,
};

use super::SharedRegistry;

#[derive(Clone)]
pub struct CatalogService {
    registry: SharedRegistry,
}

impl CatalogService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Add a book to the catalog
    pub async fn add_book(&self, title: &str, author: &str, isbn: &str) -> AppResult<BookView> {
        let mut registry = self.registry.write().await;
        let book = registry.add_book(title, author, isbn)?;
        let view = BookView::render(book, None);
        tracing::info!("Added book \"{}\" (ISBN {})", title, isbn);
        Ok(view)
    }

    /// List the catalog, optionally filtered by a title substring
    pub async fn list_books(&self, title: Option<&str>) -> Vec<BookView> {
        let registry = self.registry.read().await;
        let books: Vec<_> = match title {
            Some(query) => registry.find_by_title(query),
            None => registry.books().collect(),
        };
        books
            .into_iter()
            .map(|book| BookView::render(book, registry.borrower_name(book)))
            .collect()
    }

    /// Get one book by ISBN
    pub async fn get_book(&self, isbn: &str) -> AppResult<BookView> {
        let registry = self.registry.read().await;
        let book = registry
            .book(isbn)
            .ok_or_else(|| RegistryError::BookNotFound(isbn.to_string()))?;
        Ok(BookView::render(book, registry.borrower_name(book)))
    }

    /// Report whether a book can be borrowed
    pub async fn check_availability(&self, isbn: &str) -> AppResult<Availability> {
        let registry = self.registry.read().await;
        Ok(registry.check_availability(isbn)?)
    }
}
