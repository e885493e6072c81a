//! Domain layer: entities, repository interfaces and the unit of work.

pub mod catalogue;
pub mod catalogue_item;
pub mod provider;
pub mod unit_of_work;

pub use catalogue::{Catalogue, CatalogueRepository};
pub use catalogue_item::{names_match, CatalogueItem, CatalogueItemRepository, NewCatalogueItem};
pub use provider::{Provider, ProviderRepository};
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};

pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
