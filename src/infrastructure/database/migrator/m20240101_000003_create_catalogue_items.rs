//! Create catalogue_items table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_catalogues::Catalogues;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogueItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogueItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // No unique constraint: name uniqueness is a service-level check
                    .col(ColumnDef::new(CatalogueItems::Name).string().not_null())
                    .col(ColumnDef::new(CatalogueItems::Description).string())
                    .col(
                        ColumnDef::new(CatalogueItems::Price)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CatalogueItems::CatalogueId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogueItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CatalogueItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_catalogue_items_catalogue")
                            .from(CatalogueItems::Table, CatalogueItems::CatalogueId)
                            .to(Catalogues::Table, Catalogues::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_catalogue_items_catalogue_id")
                    .table(CatalogueItems::Table)
                    .col(CatalogueItems::CatalogueId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CatalogueItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CatalogueItems {
    Table,
    Id,
    Name,
    Description,
    Price,
    CatalogueId,
    CreatedAt,
    UpdatedAt,
}
