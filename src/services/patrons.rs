//! Patron management service

use crate::{
    error::AppResult,
    models::PatronView,
    registry::{LibraryRegistry, RegistryError},
};

use super::SharedRegistry;

#[derive(Clone)]
pub struct PatronsService {
    registry: SharedRegistry,
}

impl PatronsService {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    /// Register a new patron
    pub async fn register_patron(&self, name: &str, card_number: &str) -> AppResult<PatronView> {
        let mut registry = self.registry.write().await;
        let patron = registry.register_patron(name, card_number)?;
        let view = PatronView {
            card_number: patron.card_number.clone(),
            name: patron.name.clone(),
            held_count: 0,
            held_titles: Vec::new(),
        };
        tracing::info!("Registered patron {} (card {})", name, card_number);
        Ok(view)
    }

    /// Get one patron with their current loans
    pub async fn get_patron(&self, card_number: &str) -> AppResult<PatronView> {
        let registry = self.registry.read().await;
        let patron = registry
            .patron(card_number)
            .ok_or_else(|| RegistryError::PatronNotFound(card_number.to_string()))?;
        Ok(render(&registry, &patron.card_number, &patron.name))
    }

    /// List all patrons with their current loans
    pub async fn list_patrons(&self) -> Vec<PatronView> {
        let registry = self.registry.read().await;
        registry
            .patrons()
            .map(|patron| render(&registry, &patron.card_number, &patron.name))
            .collect()
    }
}

fn render(registry: &LibraryRegistry, card_number: &str, name: &str) -> PatronView {
    let held = registry.held_by(card_number);
    PatronView {
        card_number: card_number.to_string(),
        name: name.to_string(),
        held_count: held.len(),
        held_titles: held.iter().map(|book| book.title.clone()).collect(),
    }
}
