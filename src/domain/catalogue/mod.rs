//! Catalogue aggregate
//!
//! A catalogue (menu) belongs to exactly one provider and groups its items.

pub mod model;
pub mod repository;

pub use model::Catalogue;
pub use repository::CatalogueRepository;
