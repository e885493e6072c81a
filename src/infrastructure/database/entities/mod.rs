//! Database entities module

pub mod catalogue;
pub mod catalogue_item;
pub mod provider;

pub use catalogue::Entity as Catalogue;
pub use catalogue_item::Entity as CatalogueItem;
pub use provider::Entity as Provider;
