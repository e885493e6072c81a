//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_providers;
mod m20240101_000002_create_catalogues;
mod m20240101_000003_create_catalogue_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_providers::Migration),
            Box::new(m20240101_000002_create_catalogues::Migration),
            Box::new(m20240101_000003_create_catalogue_items::Migration),
        ]
    }
}
