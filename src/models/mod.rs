//! Data models for Circula

pub mod book;
pub mod patron;

// Re-export commonly used types
pub use book::{Availability, Book, BookView};
pub use patron::{Patron, PatronView};
