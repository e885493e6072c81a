//! Application layer: services orchestrating units of work

pub mod catalogue_items;
pub mod providers;

pub use catalogue_items::{CatalogueItemDto, CatalogueItemService, NewCatalogueItemDto};
pub use providers::ProviderService;
