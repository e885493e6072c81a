//! Catalogue item aggregate
//!
//! Contains the CatalogueItem entity (a menu entry) and its repository
//! interface.

pub mod model;
pub mod repository;

pub use model::{names_match, CatalogueItem, NewCatalogueItem};
pub use repository::CatalogueItemRepository;
