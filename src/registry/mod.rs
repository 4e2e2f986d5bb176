//! In-memory lending registry
//!
//! `LibraryRegistry` is the single source of truth for the branch: the
//! catalog (books keyed by ISBN) and the membership roll (patrons keyed by
//! card number). It is purely synchronous; the service layer wraps it in a
//! lock so each operation runs to completion against both collections.

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::{Availability, Book, Patron};

/// Failures reported by registry operations.
///
/// Every variant is an expected, recoverable condition; preconditions are
/// checked before any mutation, so a failed operation leaves the registry
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("A book with ISBN {0} already exists")]
    DuplicateIsbn(String),

    #[error("Card number {0} is already in use")]
    DuplicateCard(String),

    #[error("No book with ISBN {0}")]
    BookNotFound(String),

    #[error("No patron with card number {0}")]
    PatronNotFound(String),

    #[error("Book {0} is already on loan")]
    AlreadyBorrowed(String),

    #[error("Book {isbn} is not on loan to card {card_number}")]
    NotBorrowedByPatron { isbn: String, card_number: String },
}

/// Registry of books and patrons for one branch.
///
/// Both maps are insertion-ordered so listings and title search are
/// deterministic across identical call sequences.
#[derive(Debug, Default)]
pub struct LibraryRegistry {
    books: IndexMap<String, Book>,
    patrons: IndexMap<String, Patron>,
}

impl LibraryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book to the catalog.
    ///
    /// Fails with `DuplicateIsbn` if the ISBN is already catalogued; the
    /// existing record is left unchanged.
    pub fn add_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<&Book, RegistryError> {
        if self.books.contains_key(isbn) {
            return Err(RegistryError::DuplicateIsbn(isbn.to_string()));
        }
        let book = Book::new(title, author, isbn);
        Ok(self.books.entry(isbn.to_string()).or_insert(book))
    }

    /// Register a new patron.
    pub fn register_patron(&mut self, name: &str, card_number: &str) -> Result<&Patron, RegistryError> {
        if self.patrons.contains_key(card_number) {
            return Err(RegistryError::DuplicateCard(card_number.to_string()));
        }
        let patron = Patron::new(name, card_number);
        Ok(self.patrons.entry(card_number.to_string()).or_insert(patron))
    }

    /// Lend a book to a patron.
    ///
    /// Lookup precedence is fixed: unknown ISBN before unknown card before
    /// availability, so callers always see deterministic errors. On success
    /// the book records the borrower's card number.
    pub fn borrow(&mut self, isbn: &str, card_number: &str) -> Result<(&Book, &Patron), RegistryError> {
        if !self.books.contains_key(isbn) {
            return Err(RegistryError::BookNotFound(isbn.to_string()));
        }
        if !self.patrons.contains_key(card_number) {
            return Err(RegistryError::PatronNotFound(card_number.to_string()));
        }

        let book = self.books.get_mut(isbn).ok_or_else(|| RegistryError::BookNotFound(isbn.to_string()))?;
        if !book.is_available() {
            return Err(RegistryError::AlreadyBorrowed(isbn.to_string()));
        }
        book.borrowed_by = Some(card_number.to_string());

        let book = &self.books[isbn];
        let patron = &self.patrons[card_number];
        Ok((book, patron))
    }

    /// Accept a returned book.
    ///
    /// The check is strict: the book must be on loan *to this patron*. A
    /// book that is on the shelf, or on loan to someone else, yields
    /// `NotBorrowedByPatron` and no state change.
    pub fn return_book(&mut self, isbn: &str, card_number: &str) -> Result<(&Book, &Patron), RegistryError> {
        if !self.books.contains_key(isbn) {
            return Err(RegistryError::BookNotFound(isbn.to_string()));
        }
        if !self.patrons.contains_key(card_number) {
            return Err(RegistryError::PatronNotFound(card_number.to_string()));
        }

        let book = self.books.get_mut(isbn).ok_or_else(|| RegistryError::BookNotFound(isbn.to_string()))?;
        if book.borrowed_by.as_deref() != Some(card_number) {
            return Err(RegistryError::NotBorrowedByPatron {
                isbn: isbn.to_string(),
                card_number: card_number.to_string(),
            });
        }
        book.borrowed_by = None;

        let book = &self.books[isbn];
        let patron = &self.patrons[card_number];
        Ok((book, patron))
    }

    /// Report whether a book can be borrowed.
    ///
    /// Pure read. When on loan, the borrower's display name is resolved
    /// from the patron roll; if the card is somehow unknown the raw card
    /// number is reported instead of failing the query.
    pub fn check_availability(&self, isbn: &str) -> Result<Availability, RegistryError> {
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| RegistryError::BookNotFound(isbn.to_string()))?;

        match &book.borrowed_by {
            None => Ok(Availability::Available),
            Some(card) => {
                let borrower = self
                    .patrons
                    .get(card)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| card.clone());
                Ok(Availability::OnLoan { borrower })
            }
        }
    }

    /// Case-insensitive substring search over titles, in catalog order.
    pub fn find_by_title(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .values()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    pub fn patron(&self, card_number: &str) -> Option<&Patron> {
        self.patrons.get(card_number)
    }

    /// All books in catalog order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// All patrons in registration order
    pub fn patrons(&self) -> impl Iterator<Item = &Patron> {
        self.patrons.values()
    }

    /// Books currently held by a patron, derived from the catalog
    pub fn held_by(&self, card_number: &str) -> Vec<&Book> {
        self.books
            .values()
            .filter(|book| book.borrowed_by.as_deref() == Some(card_number))
            .collect()
    }

    /// Display name of the patron holding a book, if any
    pub fn borrower_name(&self, book: &Book) -> Option<&str> {
        book.borrowed_by
            .as_deref()
            .and_then(|card| self.patrons.get(card))
            .map(|p| p.name.as_str())
    }
}
