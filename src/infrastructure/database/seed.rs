//! Demo data for local development

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, Set};
use tracing::info;

use super::entities::{catalogue, provider};

pub const DEMO_PROVIDER_NAME: &str = "FoodPal Demo Kitchen";
pub const DEMO_CATALOGUE_NAME: &str = "Main menu";

/// Insert one provider with one empty catalogue if no providers exist yet.
///
/// Returns the `(provider_id, catalogue_id)` pair that was created, or
/// `None` when the database already had providers.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<Option<(i32, i32)>, sea_orm::DbErr> {
    let providers_count = provider::Entity::find().count(db).await?;
    if providers_count > 0 {
        return Ok(None);
    }

    info!("Seeding demo provider and catalogue...");
    let now = Utc::now();

    let provider = provider::ActiveModel {
        id: NotSet,
        name: Set(DEMO_PROVIDER_NAME.to_string()),
        created_at: Set(now),
    }
    .insert(db)
    .await?;

    let catalogue = catalogue::ActiveModel {
        id: NotSet,
        name: Set(DEMO_CATALOGUE_NAME.to_string()),
        provider_id: Set(provider.id),
        created_at: Set(now),
    }
    .insert(db)
    .await?;

    info!(
        "Demo data created: provider {} with catalogue {}",
        provider.id, catalogue.id
    );
    Ok(Some((provider.id, catalogue.id)))
}
