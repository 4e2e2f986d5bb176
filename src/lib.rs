//! Circula - Single-branch library lending server
//!
//! An in-memory registry of books and patrons behind a REST JSON API:
//! catalog a book, register a patron, lend a copy, accept a return, check
//! availability, and search the catalog by title.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod seed;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use registry::{LibraryRegistry, RegistryError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
