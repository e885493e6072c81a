//! Catalogue item domain entity

use chrono::{DateTime, Utc};

/// Case-insensitive comparison used for item-name uniqueness within a provider.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// A menu entry offered by a provider through one of its catalogues
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Price in smallest currency unit (e.g., cents)
    pub price: i32,
    pub catalogue_id: i32,
    /// Owning provider, resolved through the catalogue
    pub provider_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogueItem {
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    pub fn belongs_to(&self, provider_id: i32) -> bool {
        self.provider_id == provider_id
    }

    /// Replace the mutable fields. The catalogue association and id are kept.
    pub fn apply_changes(&mut self, name: String, description: Option<String>, price: i32) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.updated_at = Utc::now();
    }
}

/// Data needed to persist a new catalogue item. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatalogueItem {
    pub name: String,
    pub description: Option<String>,
    pub price: i32,
    pub catalogue_id: i32,
}
