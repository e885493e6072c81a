//! SeaORM implementation of CatalogueRepository

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, EntityTrait};

use super::db_err;
use crate::domain::{Catalogue, CatalogueRepository, DomainResult};
use crate::infrastructure::database::entities::catalogue;

fn entity_to_domain(c: catalogue::Model) -> Catalogue {
    Catalogue {
        id: c.id,
        name: c.name,
        provider_id: c.provider_id,
    }
}

pub struct SeaOrmCatalogueRepository {
    conn: Arc<DatabaseTransaction>,
}

impl SeaOrmCatalogueRepository {
    pub fn new(conn: Arc<DatabaseTransaction>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CatalogueRepository for SeaOrmCatalogueRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Catalogue>> {
        let model = catalogue::Entity::find_by_id(id)
            .one(self.conn.as_ref())
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }
}
