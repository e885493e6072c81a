//! SeaORM implementation of CatalogueItemRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, info};

use super::db_err;
use crate::domain::{
    CatalogueItem, CatalogueItemRepository, DomainError, DomainResult, NewCatalogueItem,
};
use crate::infrastructure::database::entities::{catalogue, catalogue_item};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(item: catalogue_item::Model, owner: &catalogue::Model) -> CatalogueItem {
    CatalogueItem {
        id: item.id,
        name: item.name,
        description: item.description,
        price: item.price,
        catalogue_id: item.catalogue_id,
        provider_id: owner.provider_id,
        created_at: item.created_at,
        updated_at: item.updated_at,
    }
}

fn missing_catalogue(item_id: i32, catalogue_id: i32) -> DomainError {
    DomainError::Storage(format!(
        "Catalogue item {} references missing catalogue {}",
        item_id, catalogue_id
    ))
}

// ── SeaOrmCatalogueItemRepository ───────────────────────────────

pub struct SeaOrmCatalogueItemRepository {
    conn: Arc<DatabaseTransaction>,
}

impl SeaOrmCatalogueItemRepository {
    pub fn new(conn: Arc<DatabaseTransaction>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CatalogueItemRepository for SeaOrmCatalogueItemRepository {
    async fn find_all_with_provider(&self, provider_id: i32) -> DomainResult<Vec<CatalogueItem>> {
        let rows = catalogue_item::Entity::find()
            .find_also_related(catalogue::Entity)
            .filter(catalogue::Column::ProviderId.eq(provider_id))
            .order_by_asc(catalogue_item::Column::Id)
            .all(self.conn.as_ref())
            .await
            .map_err(db_err)?;

        rows.into_iter()
            .map(|(item, owner)| match owner {
                Some(owner) => Ok(entity_to_domain(item, &owner)),
                None => Err(missing_catalogue(item.id, item.catalogue_id)),
            })
            .collect()
    }

    async fn find_with_provider_by_id(&self, id: i32) -> DomainResult<Option<CatalogueItem>> {
        let row = catalogue_item::Entity::find_by_id(id)
            .find_also_related(catalogue::Entity)
            .one(self.conn.as_ref())
            .await
            .map_err(db_err)?;

        match row {
            None => Ok(None),
            Some((item, Some(owner))) => Ok(Some(entity_to_domain(item, &owner))),
            Some((item, None)) => Err(missing_catalogue(item.id, item.catalogue_id)),
        }
    }

    async fn find_by_name_for_provider(
        &self,
        name: &str,
        provider_id: i32,
    ) -> DomainResult<Option<CatalogueItem>> {
        // Compared in Rust so the case folding matches the in-memory store
        // (SQLite's lower() only folds ASCII).
        let items = self.find_all_with_provider(provider_id).await?;
        Ok(items.into_iter().find(|item| item.is_named(name)))
    }

    async fn add(&self, item: NewCatalogueItem) -> DomainResult<i32> {
        let now = Utc::now();
        let model = catalogue_item::ActiveModel {
            id: NotSet,
            name: Set(item.name),
            description: Set(item.description),
            price: Set(item.price),
            catalogue_id: Set(item.catalogue_id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(self.conn.as_ref()).await.map_err(db_err)?;
        debug!("Catalogue item staged: {} ({})", result.name, result.id);
        Ok(result.id)
    }

    async fn update(&self, item: CatalogueItem) -> DomainResult<()> {
        let existing = catalogue_item::Entity::find_by_id(item.id)
            .one(self.conn.as_ref())
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("CatalogueItem", "id", item.id));
        };

        let mut model: catalogue_item::ActiveModel = existing.into();
        model.name = Set(item.name);
        model.description = Set(item.description);
        model.price = Set(item.price);
        model.updated_at = Set(item.updated_at);
        model.update(self.conn.as_ref()).await.map_err(db_err)?;

        info!("Catalogue item {} updated", item.id);
        Ok(())
    }

    async fn remove(&self, id: i32) -> DomainResult<()> {
        let result = catalogue_item::Entity::delete_by_id(id)
            .exec(self.conn.as_ref())
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("CatalogueItem", "id", id));
        }
        Ok(())
    }
}
