//! Catalogue item transfer shapes

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of a create request. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogueItemDto {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Soup")]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// Price in smallest currency unit (e.g., cents)
    #[validate(range(min = 0, message = "Price must not be negative"))]
    #[schema(example = 450)]
    pub price: i32,

    #[schema(example = 1)]
    pub catalogue_id: i32,
}

/// A catalogue item as returned by reads and accepted by updates.
///
/// `provider_id` is resolved through the catalogue; it is ignored on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueItemDto {
    pub id: i32,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i32,

    pub catalogue_id: i32,

    #[serde(default)]
    pub provider_id: i32,
}
