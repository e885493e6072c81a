//! Catalogue item business logic service

use std::sync::Arc;

use tracing::info;

use super::dto::{CatalogueItemDto, NewCatalogueItemDto};
use crate::domain::{Catalogue, DomainError, DomainResult, UnitOfWorkFactory};

/// Service for catalogue item operations.
///
/// Every method opens its own unit of work. Reads let it drop, writes
/// commit it.
pub struct CatalogueItemService {
    uow: Arc<dyn UnitOfWorkFactory>,
}

impl CatalogueItemService {
    pub fn new(uow: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { uow }
    }

    pub async fn get_catalogue_items_for_provider(
        &self,
        provider_id: i32,
    ) -> DomainResult<Vec<CatalogueItemDto>> {
        let uow = self.uow.begin().await?;
        let items = uow
            .catalogue_items()
            .find_all_with_provider(provider_id)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_catalogue_item_by_id(
        &self,
        item_id: i32,
    ) -> DomainResult<Option<CatalogueItemDto>> {
        let uow = self.uow.begin().await?;
        let item = uow.catalogue_items().find_with_provider_by_id(item_id).await?;
        Ok(item.map(Into::into))
    }

    /// Whether the provider already has an item with this name (case-insensitive).
    pub async fn catalogue_item_exists(&self, name: &str, provider_id: i32) -> DomainResult<bool> {
        self.catalogue_item_name_taken(name, provider_id, None).await
    }

    /// Like [`catalogue_item_exists`](Self::catalogue_item_exists) but ignores
    /// `except_item_id`, so an item can keep its own name on update.
    pub async fn catalogue_item_name_taken(
        &self,
        name: &str,
        provider_id: i32,
        except_item_id: Option<i32>,
    ) -> DomainResult<bool> {
        let uow = self.uow.begin().await?;
        let existing = uow
            .catalogue_items()
            .find_by_name_for_provider(name, provider_id)
            .await?;
        Ok(existing.is_some_and(|item| Some(item.id) != except_item_id))
    }

    pub async fn find_catalogue(&self, catalogue_id: i32) -> DomainResult<Option<Catalogue>> {
        let uow = self.uow.begin().await?;
        let catalogue = uow.catalogues().find_by_id(catalogue_id).await?;
        Ok(catalogue)
    }

    pub async fn create(&self, dto: NewCatalogueItemDto) -> DomainResult<i32> {
        let uow = self.uow.begin().await?;

        let catalogue_id = dto.catalogue_id;
        if uow.catalogues().find_by_id(catalogue_id).await?.is_none() {
            return Err(DomainError::validation(
                "CatalogueId",
                format!("Catalogue {} does not exist", catalogue_id),
            ));
        }

        let id = uow.catalogue_items().add(dto.into()).await?;
        uow.commit().await?;

        info!("Catalogue item {} created in catalogue {}", id, catalogue_id);
        Ok(id)
    }

    /// Replace name, description and price of an existing item.
    ///
    /// The item is read again inside this unit of work, so one deleted since
    /// the caller's lookup is reported as `NotFound`.
    pub async fn update(&self, dto: CatalogueItemDto) -> DomainResult<()> {
        let uow = self.uow.begin().await?;

        let Some(mut item) = uow.catalogue_items().find_with_provider_by_id(dto.id).await? else {
            return Err(DomainError::not_found("CatalogueItem", "id", dto.id));
        };

        item.apply_changes(dto.name, dto.description, dto.price);
        uow.catalogue_items().update(item).await?;
        uow.commit().await?;

        info!("Catalogue item {} updated", dto.id);
        Ok(())
    }

    pub async fn delete(&self, item_id: i32) -> DomainResult<()> {
        let uow = self.uow.begin().await?;

        let Some(item) = uow.catalogue_items().find_with_provider_by_id(item_id).await? else {
            return Err(DomainError::not_found("CatalogueItem", "id", item_id));
        };

        uow.catalogue_items().remove(item.id).await?;
        uow.commit().await?;

        info!(
            "Catalogue item {} deleted from provider {}",
            item.id, item.provider_id
        );
        Ok(())
    }
}
