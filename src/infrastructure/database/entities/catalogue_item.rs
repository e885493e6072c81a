//! Catalogue item entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "catalogue_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Not unique at the storage level; uniqueness per provider is checked
    /// by the service before insert.
    pub name: String,

    #[sea_orm(nullable)]
    pub description: Option<String>,

    /// Price in smallest currency unit
    pub price: i32,

    pub catalogue_id: i32,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::catalogue::Entity",
        from = "Column::CatalogueId",
        to = "super::catalogue::Column::Id"
    )]
    Catalogue,
}

impl Related<super::catalogue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Catalogue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
