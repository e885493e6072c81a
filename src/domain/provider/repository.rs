//! Provider repository interface

use async_trait::async_trait;

use super::model::Provider;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProviderRepository: Send + Sync {
    async fn exists(&self, id: i32) -> DomainResult<bool>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Provider>>;
}
