//! Catalogue item use cases

pub mod dto;
pub mod mapping;
pub mod service;

pub use dto::{CatalogueItemDto, NewCatalogueItemDto};
pub use service::CatalogueItemService;
