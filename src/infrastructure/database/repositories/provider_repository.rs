//! SeaORM implementation of ProviderRepository

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, EntityTrait, PaginatorTrait};

use super::db_err;
use crate::domain::{DomainResult, Provider, ProviderRepository};
use crate::infrastructure::database::entities::provider;

fn entity_to_domain(p: provider::Model) -> Provider {
    Provider {
        id: p.id,
        name: p.name,
    }
}

pub struct SeaOrmProviderRepository {
    conn: Arc<DatabaseTransaction>,
}

impl SeaOrmProviderRepository {
    pub fn new(conn: Arc<DatabaseTransaction>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProviderRepository for SeaOrmProviderRepository {
    async fn exists(&self, id: i32) -> DomainResult<bool> {
        let count = provider::Entity::find_by_id(id)
            .count(self.conn.as_ref())
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Provider>> {
        let model = provider::Entity::find_by_id(id)
            .one(self.conn.as_ref())
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }
}
