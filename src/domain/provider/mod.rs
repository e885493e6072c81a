//! Provider aggregate
//!
//! A food provider owns catalogues. Catalogue-item operations only need to
//! know whether a provider exists.

pub mod model;
pub mod repository;

pub use model::Provider;
pub use repository::ProviderRepository;
