//! Provider lookups

use std::sync::Arc;

use crate::domain::{DomainResult, Provider, UnitOfWorkFactory};

pub struct ProviderService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl ProviderService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    pub async fn get_by_id(&self, provider_id: i32) -> DomainResult<Option<Provider>> {
        let uow = self.uow.begin().await?;
        let provider = uow.providers().find_by_id(provider_id).await?;
        Ok(provider)
    }

    pub async fn exists(&self, provider_id: i32) -> DomainResult<bool> {
        let uow = self.uow.begin().await?;
        let exists = uow.providers().exists(provider_id).await?;
        Ok(exists)
    }
}
