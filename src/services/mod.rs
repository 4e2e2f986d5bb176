//! Business logic services

pub mod catalog;
pub mod loans;
pub mod patrons;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::registry::LibraryRegistry;

/// Shared handle to the registry.
///
/// Borrow and return touch both collections, so every service call holds
/// the lock for the whole operation; readers take a shared guard.
pub type SharedRegistry = Arc<RwLock<LibraryRegistry>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub patrons: patrons::PatronsService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services over one shared registry
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            catalog: catalog::CatalogService::new(registry.clone()),
            patrons: patrons::PatronsService::new(registry.clone()),
            loans: loans::LoansService::new(registry),
        }
    }
}
