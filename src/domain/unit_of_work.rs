//! Unit of work interfaces
//!
//! A unit of work groups repository calls into one atomic change set.
//! Changes become visible only after [`UnitOfWork::commit`]; dropping an
//! uncommitted unit of work discards them.
//!
//! ```ignore
//! let uow = factory.begin().await?;
//! let id = uow.catalogue_items().add(new_item).await?;
//! uow.commit().await?;
//! ```

use async_trait::async_trait;

use super::catalogue::CatalogueRepository;
use super::catalogue_item::CatalogueItemRepository;
use super::provider::ProviderRepository;
use super::DomainResult;

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn providers(&self) -> &dyn ProviderRepository;
    fn catalogues(&self) -> &dyn CatalogueRepository;
    fn catalogue_items(&self) -> &dyn CatalogueItemRepository;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

/// Opens units of work against a store.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
