//! SeaORM implementation of UnitOfWork
//!
//! Every unit of work owns one `DatabaseTransaction`. Repositories share it
//! through an `Arc`; `commit` reclaims sole ownership and commits. Dropping
//! the unit of work without committing rolls the transaction back.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use super::catalogue_item_repository::SeaOrmCatalogueItemRepository;
use super::catalogue_repository::SeaOrmCatalogueRepository;
use super::db_err;
use super::provider_repository::SeaOrmProviderRepository;
use crate::domain::{
    CatalogueItemRepository, CatalogueRepository, DomainError, DomainResult, ProviderRepository,
    UnitOfWork, UnitOfWorkFactory,
};

/// Opens SeaORM-backed units of work on a connection pool.
///
/// ```ignore
/// let factory = SeaOrmUnitOfWorkFactory::new(db.clone());
/// let uow = factory.begin().await?;
/// let exists = uow.providers().exists(1).await?;
/// ```
#[derive(Clone)]
pub struct SeaOrmUnitOfWorkFactory {
    db: DatabaseConnection,
}

impl SeaOrmUnitOfWorkFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SeaOrmUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        Ok(Box::new(SeaOrmUnitOfWork::new(txn)))
    }
}

pub struct SeaOrmUnitOfWork {
    txn: Arc<DatabaseTransaction>,
    providers: SeaOrmProviderRepository,
    catalogues: SeaOrmCatalogueRepository,
    catalogue_items: SeaOrmCatalogueItemRepository,
}

impl SeaOrmUnitOfWork {
    pub fn new(txn: DatabaseTransaction) -> Self {
        let txn = Arc::new(txn);
        Self {
            providers: SeaOrmProviderRepository::new(txn.clone()),
            catalogues: SeaOrmCatalogueRepository::new(txn.clone()),
            catalogue_items: SeaOrmCatalogueItemRepository::new(txn.clone()),
            txn,
        }
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    fn providers(&self) -> &dyn ProviderRepository {
        &self.providers
    }

    fn catalogues(&self) -> &dyn CatalogueRepository {
        &self.catalogues
    }

    fn catalogue_items(&self) -> &dyn CatalogueItemRepository {
        &self.catalogue_items
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let SeaOrmUnitOfWork {
            txn,
            providers,
            catalogues,
            catalogue_items,
        } = *self;
        drop(providers);
        drop(catalogues);
        drop(catalogue_items);

        let txn = Arc::try_unwrap(txn)
            .map_err(|_| DomainError::Storage("Transaction is still shared".to_string()))?;
        txn.commit().await.map_err(db_err)
    }
}
