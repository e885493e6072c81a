//! Conversions between catalogue item domain models and transfer shapes

use super::dto::{CatalogueItemDto, NewCatalogueItemDto};
use crate::domain::{CatalogueItem, NewCatalogueItem};

impl From<CatalogueItem> for CatalogueItemDto {
    fn from(item: CatalogueItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            catalogue_id: item.catalogue_id,
            provider_id: item.provider_id,
        }
    }
}

impl From<NewCatalogueItemDto> for NewCatalogueItem {
    fn from(dto: NewCatalogueItemDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            catalogue_id: dto.catalogue_id,
        }
    }
}
