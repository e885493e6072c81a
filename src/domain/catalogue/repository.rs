//! Catalogue repository interface

use async_trait::async_trait;

use super::model::Catalogue;
use crate::domain::DomainResult;

#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Catalogue>>;
}
