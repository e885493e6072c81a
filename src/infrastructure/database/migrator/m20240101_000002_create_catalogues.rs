//! Create catalogues table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_providers::Providers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catalogues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Catalogues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Catalogues::Name).string().not_null())
                    .col(ColumnDef::new(Catalogues::ProviderId).integer().not_null())
                    .col(
                        ColumnDef::new(Catalogues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_catalogues_provider")
                            .from(Catalogues::Table, Catalogues::ProviderId)
                            .to(Providers::Table, Providers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_catalogues_provider_id")
                    .table(Catalogues::Table)
                    .col(Catalogues::ProviderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Catalogues::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Catalogues {
    Table,
    Id,
    Name,
    ProviderId,
    CreatedAt,
}
