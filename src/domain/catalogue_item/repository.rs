//! Catalogue item repository interface

use async_trait::async_trait;

use super::model::{CatalogueItem, NewCatalogueItem};
use crate::domain::DomainResult;

#[async_trait]
pub trait CatalogueItemRepository: Send + Sync {
    /// All items whose catalogue belongs to `provider_id`, ordered by id.
    async fn find_all_with_provider(&self, provider_id: i32) -> DomainResult<Vec<CatalogueItem>>;

    /// Single item by id with its provider context resolved.
    async fn find_with_provider_by_id(&self, id: i32) -> DomainResult<Option<CatalogueItem>>;

    /// Case-insensitive lookup of an item name among a provider's items.
    async fn find_by_name_for_provider(
        &self,
        name: &str,
        provider_id: i32,
    ) -> DomainResult<Option<CatalogueItem>>;

    /// Stage a new item. Returns the assigned id.
    async fn add(&self, item: NewCatalogueItem) -> DomainResult<i32>;

    async fn update(&self, item: CatalogueItem) -> DomainResult<()>;

    async fn remove(&self, id: i32) -> DomainResult<()>;
}
