//! Patron model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered patron, keyed by card number.
///
/// The set of books a patron currently holds is not stored here; it is
/// derived by filtering the catalog on `Book::borrowed_by`, so the two
/// sides of the lending relation can never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Patron {
    pub card_number: String,
    pub name: String,
}

impl Patron {
    pub fn new(name: &str, card_number: &str) -> Self {
        Self {
            card_number: card_number.to_string(),
            name: name.to_string(),
        }
    }
}

/// Patron with their current loans for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatronView {
    pub card_number: String,
    pub name: String,
    /// Number of books currently held
    pub held_count: usize,
    /// Titles of the books currently held, in catalog order
    pub held_titles: Vec<String>,
}
