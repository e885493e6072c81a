//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories bound to one database transaction,
//! grouped by [`SeaOrmUnitOfWork`].

pub mod catalogue_item_repository;
pub mod catalogue_repository;
pub mod provider_repository;
pub mod unit_of_work;

pub use unit_of_work::{SeaOrmUnitOfWork, SeaOrmUnitOfWorkFactory};

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}
