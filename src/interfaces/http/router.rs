//! API Router with Swagger UI

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiError, ApiResponse, ValidationProblem};
use super::modules::catalogue_items::{handlers as catalogue_items, CatalogueItemsState};
use super::modules::health::{self, HealthState};
use crate::application::{
    CatalogueItemDto, CatalogueItemService, NewCatalogueItemDto, ProviderService,
};
use crate::config::CatalogueConfig;
use crate::domain::UnitOfWorkFactory;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Catalogue items
        catalogue_items::list_catalogue_items,
        catalogue_items::get_catalogue_item,
        catalogue_items::create_catalogue_item,
        catalogue_items::update_catalogue_item,
        catalogue_items::delete_catalogue_item,
    ),
    components(
        schemas(
            ApiResponse<String>,
            ValidationProblem,
            health::HealthResponse,
            health::ComponentHealth,
            NewCatalogueItemDto,
            CatalogueItemDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Catalogue Items", description = "Menu items offered by a provider"),
    ),
    info(
        title = "FoodPal Providers API",
        version = "1.0.0",
        description = "REST API for managing provider catalogue (menu) items",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Turns a handler panic into the generic 500 response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", details);
    ApiError::Unhandled.into_response()
}

/// Create the API router with all routes
pub fn create_api_router(uow: Arc<dyn UnitOfWorkFactory>, catalogue: &CatalogueConfig) -> Router {
    let items_state = CatalogueItemsState {
        providers: Arc::new(ProviderService::new(uow.clone())),
        items: Arc::new(CatalogueItemService::new(uow.clone())),
        enforce_item_ownership: catalogue.enforce_item_ownership,
    };

    let health_state = HealthState {
        uow,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(CorsAny)
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    let menu_routes = Router::new()
        .route(
            "/providers/{providerId}/menu",
            get(catalogue_items::list_catalogue_items).post(catalogue_items::create_catalogue_item),
        )
        .route(
            "/providers/{providerId}/menu/{itemId}",
            get(catalogue_items::get_catalogue_item)
                .put(catalogue_items::update_catalogue_item)
                .delete(catalogue_items::delete_catalogue_item),
        )
        .with_state(items_state);

    let health_routes = Router::new()
        .route("/health", get(health::handlers::health_check))
        .with_state(health_state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .merge(menu_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
