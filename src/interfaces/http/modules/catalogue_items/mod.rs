pub mod handlers;

pub use handlers::CatalogueItemsState;
