//! Catalogue item (menu) REST API handlers
//!
//! Resource: `/providers/{providerId}/menu`. The provider must exist for every
//! operation. With ownership enforcement on, an item or catalogue of another
//! provider is treated as absent.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use tracing::warn;
use validator::ValidationErrors;

use crate::application::{
    CatalogueItemDto, CatalogueItemService, NewCatalogueItemDto, ProviderService,
};
use crate::interfaces::http::common::error::add_field_error;
use crate::interfaces::http::common::{ApiError, ApiResponse, ValidatedJson, ValidationProblem};

pub const DUPLICATE_NAME: &str =
    "A catalogue item with the same name already exists for this provider";
pub const ID_MISMATCH: &str = "Request body not appropriate for ID";

#[derive(Clone)]
pub struct CatalogueItemsState {
    pub providers: Arc<ProviderService>,
    pub items: Arc<CatalogueItemService>,
    pub enforce_item_ownership: bool,
}

// ── Precondition helpers ────────────────────────────────────────

async fn ensure_provider(state: &CatalogueItemsState, provider_id: i32) -> Result<(), ApiError> {
    if state.providers.exists(provider_id).await? {
        Ok(())
    } else {
        Err(ApiError::not_found(format!("Provider {} not found", provider_id)))
    }
}

async fn load_item(
    state: &CatalogueItemsState,
    provider_id: i32,
    item_id: i32,
) -> Result<CatalogueItemDto, ApiError> {
    let not_found = || ApiError::not_found(format!("Catalogue item {} not found", item_id));

    let item = state
        .items
        .get_catalogue_item_by_id(item_id)
        .await?
        .ok_or_else(not_found)?;

    if state.enforce_item_ownership && item.provider_id != provider_id {
        warn!(
            "Catalogue item {} belongs to provider {}, not {}",
            item_id, item.provider_id, provider_id
        );
        return Err(not_found());
    }
    Ok(item)
}

// ── Handlers ────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/providers/{providerId}/menu",
    tag = "Catalogue Items",
    params(("providerId" = i32, Path, description = "Provider ID")),
    responses(
        (status = 200, description = "Items of the provider", body = Vec<CatalogueItemDto>),
        (status = 404, description = "Provider not found", body = ApiResponse<String>),
        (status = 500, description = "Failure", body = ApiResponse<String>)
    )
)]
pub async fn list_catalogue_items(
    State(state): State<CatalogueItemsState>,
    Path(provider_id): Path<i32>,
) -> Result<Json<Vec<CatalogueItemDto>>, ApiError> {
    ensure_provider(&state, provider_id).await?;
    let items = state
        .items
        .get_catalogue_items_for_provider(provider_id)
        .await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/providers/{providerId}/menu/{itemId}",
    tag = "Catalogue Items",
    params(
        ("providerId" = i32, Path, description = "Provider ID"),
        ("itemId" = i32, Path, description = "Catalogue item ID")
    ),
    responses(
        (status = 200, description = "Catalogue item", body = CatalogueItemDto),
        (status = 404, description = "Provider or item not found", body = ApiResponse<String>),
        (status = 500, description = "Failure", body = ApiResponse<String>)
    )
)]
pub async fn get_catalogue_item(
    State(state): State<CatalogueItemsState>,
    Path((provider_id, item_id)): Path<(i32, i32)>,
) -> Result<Json<CatalogueItemDto>, ApiError> {
    ensure_provider(&state, provider_id).await?;
    let item = load_item(&state, provider_id, item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/providers/{providerId}/menu",
    tag = "Catalogue Items",
    params(("providerId" = i32, Path, description = "Provider ID")),
    request_body = NewCatalogueItemDto,
    responses(
        (status = 201, description = "Created; body is the new id", body = i32,
            headers(("Location" = String, description = "URL of the new item"))),
        (status = 400, description = "Invalid data", body = ValidationProblem),
        (status = 404, description = "Provider not found", body = ApiResponse<String>),
        (status = 500, description = "Failure", body = ApiResponse<String>)
    )
)]
pub async fn create_catalogue_item(
    State(state): State<CatalogueItemsState>,
    Path(provider_id): Path<i32>,
    ValidatedJson(body): ValidatedJson<NewCatalogueItemDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<i32>), ApiError> {
    ensure_provider(&state, provider_id).await?;

    let mut errors = ValidationErrors::new();

    if state
        .items
        .catalogue_item_exists(&body.name, provider_id)
        .await?
    {
        add_field_error(&mut errors, "Name", DUPLICATE_NAME);
    }

    match state.items.find_catalogue(body.catalogue_id).await? {
        None => add_field_error(
            &mut errors,
            "CatalogueId",
            format!("Catalogue {} does not exist", body.catalogue_id),
        ),
        Some(catalogue) if state.enforce_item_ownership && !catalogue.is_owned_by(provider_id) => {
            add_field_error(
                &mut errors,
                "CatalogueId",
                format!(
                    "Catalogue {} does not belong to provider {}",
                    body.catalogue_id, provider_id
                ),
            )
        }
        Some(_) => {}
    }

    if !errors.is_empty() {
        warn!("Rejected catalogue item for provider {}: {}", provider_id, errors);
        return Err(ApiError::Validation(errors));
    }

    let id = state.items.create(body).await?;
    if id == 0 {
        return Err(ApiError::PersistenceFailure);
    }

    let location = format!("/providers/{}/menu/{}", provider_id, id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(id)))
}

#[utoipa::path(
    put,
    path = "/providers/{providerId}/menu/{itemId}",
    tag = "Catalogue Items",
    params(
        ("providerId" = i32, Path, description = "Provider ID"),
        ("itemId" = i32, Path, description = "Catalogue item ID")
    ),
    request_body = CatalogueItemDto,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Invalid data or id mismatch", body = ValidationProblem),
        (status = 404, description = "Provider or item not found", body = ApiResponse<String>),
        (status = 500, description = "Failure", body = ApiResponse<String>)
    )
)]
pub async fn update_catalogue_item(
    State(state): State<CatalogueItemsState>,
    Path((provider_id, item_id)): Path<(i32, i32)>,
    ValidatedJson(body): ValidatedJson<CatalogueItemDto>,
) -> Result<StatusCode, ApiError> {
    if body.id != item_id {
        return Err(ApiError::field("Identifier", ID_MISMATCH));
    }

    ensure_provider(&state, provider_id).await?;
    let existing = load_item(&state, provider_id, item_id).await?;

    // Names are unique within the provider that owns the item
    if state
        .items
        .catalogue_item_name_taken(&body.name, existing.provider_id, Some(item_id))
        .await?
    {
        return Err(ApiError::field("Name", DUPLICATE_NAME));
    }

    state.items.update(body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/providers/{providerId}/menu/{itemId}",
    tag = "Catalogue Items",
    params(
        ("providerId" = i32, Path, description = "Provider ID"),
        ("itemId" = i32, Path, description = "Catalogue item ID")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Provider or item not found", body = ApiResponse<String>),
        (status = 500, description = "Failure", body = ApiResponse<String>)
    )
)]
pub async fn delete_catalogue_item(
    State(state): State<CatalogueItemsState>,
    Path((provider_id, item_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    ensure_provider(&state, provider_id).await?;
    load_item(&state, provider_id, item_id).await?;

    state.items.delete(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{HeaderMap, Request};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::CatalogueConfig;
    use crate::domain::{Catalogue, Provider};
    use crate::infrastructure::{InMemoryStore, InMemoryUnitOfWorkFactory};
    use crate::interfaces::http::create_api_router;

    const PROVIDER: i32 = 1;
    const CATALOGUE: i32 = 5;
    const OTHER_PROVIDER: i32 = 2;
    const OTHER_CATALOGUE: i32 = 6;
    const EMPTY_PROVIDER: i32 = 3;

    fn app_with_ownership(enforce_item_ownership: bool) -> (Arc<InMemoryStore>, Router) {
        let store = Arc::new(InMemoryStore::new());
        store.insert_provider(Provider::new(PROVIDER, "Bistro"));
        store.insert_catalogue(Catalogue::new(CATALOGUE, "Lunch", PROVIDER));
        store.insert_provider(Provider::new(OTHER_PROVIDER, "Diner"));
        store.insert_catalogue(Catalogue::new(OTHER_CATALOGUE, "Dinner", OTHER_PROVIDER));
        store.insert_provider(Provider::new(EMPTY_PROVIDER, "Empty"));

        let router = create_api_router(
            Arc::new(InMemoryUnitOfWorkFactory::new(store.clone())),
            &CatalogueConfig {
                enforce_item_ownership,
            },
        );
        (store, router)
    }

    fn app() -> (Arc<InMemoryStore>, Router) {
        app_with_ownership(true)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, json)
    }

    async fn create(app: &Router, provider_id: i32, name: &str, catalogue_id: i32) -> i32 {
        let (status, _, body) = send(
            app,
            "POST",
            &format!("/providers/{}/menu", provider_id),
            Some(json!({"name": name, "price": 450, "catalogueId": catalogue_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body.as_i64().unwrap() as i32
    }

    // ── List ────────────────────────────────────────────────────

    #[tokio::test]
    async fn list_for_unknown_provider_is_404() {
        let (_, app) = app();
        let (status, _, body) = send(&app, "GET", "/providers/404/menu", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn list_for_provider_without_items_is_empty_array() {
        let (_, app) = app();
        let (status, _, body) = send(&app, "GET", "/providers/3/menu", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn list_returns_only_the_providers_items() {
        let (_, app) = app();
        create(&app, PROVIDER, "Soup", CATALOGUE).await;
        create(&app, PROVIDER, "Salad", CATALOGUE).await;
        create(&app, OTHER_PROVIDER, "Steak", OTHER_CATALOGUE).await;

        let (status, _, body) = send(&app, "GET", "/providers/1/menu", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Soup", "Salad"]);
    }

    // ── Create ──────────────────────────────────────────────────

    #[tokio::test]
    async fn create_returns_id_and_location() {
        let (_, app) = app();
        let (status, headers, body) = send(
            &app,
            "POST",
            "/providers/1/menu",
            Some(json!({"name": "Soup", "description": "Tomato", "price": 450, "catalogueId": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id = body.as_i64().unwrap();
        assert!(id > 0);
        assert_eq!(
            headers.get(header::LOCATION).unwrap(),
            &format!("/providers/1/menu/{}", id)
        );

        let (status, _, item) = send(&app, "GET", &format!("/providers/1/menu/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["id"], id);
        assert_eq!(item["name"], "Soup");
        assert_eq!(item["description"], "Tomato");
        assert_eq!(item["catalogueId"], 5);
        assert_eq!(item["providerId"], 1);
    }

    #[tokio::test]
    async fn create_for_unknown_provider_is_404_and_persists_nothing() {
        let (store, app) = app();
        let (status, _, _) = send(
            &app,
            "POST",
            "/providers/404/menu",
            Some(json!({"name": "Soup", "price": 450, "catalogueId": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_case_insensitively() {
        let (store, app) = app();
        create(&app, PROVIDER, "Soup", CATALOGUE).await;

        let (status, _, body) = send(
            &app,
            "POST",
            "/providers/1/menu",
            Some(json!({"name": "SOUP", "price": 100, "catalogueId": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "One or more validation errors occurred.");
        assert_eq!(body["errors"]["Name"][0], DUPLICATE_NAME);
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn same_name_under_another_provider_is_allowed() {
        let (_, app) = app();
        create(&app, PROVIDER, "Soup", CATALOGUE).await;
        create(&app, OTHER_PROVIDER, "Soup", OTHER_CATALOGUE).await;
    }

    #[tokio::test]
    async fn missing_catalogue_is_reported_with_duplicate_name() {
        let (store, app) = app();
        create(&app, PROVIDER, "Soup", CATALOGUE).await;

        let (status, _, body) = send(
            &app,
            "POST",
            "/providers/1/menu",
            Some(json!({"name": "soup", "price": 100, "catalogueId": 99})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["Name"].is_array());
        assert_eq!(body["errors"]["CatalogueId"][0], "Catalogue 99 does not exist");
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn body_shape_violations_are_400() {
        let (_, app) = app();
        let (status, _, body) = send(
            &app,
            "POST",
            "/providers/1/menu",
            Some(json!({"name": "", "price": -5, "catalogueId": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["Name"].is_array());
        assert!(body["errors"]["Price"].is_array());
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let (_, app) = app();
        let req = Request::builder()
            .method("POST")
            .uri("/providers/1/menu")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\":"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn catalogue_of_another_provider_depends_on_ownership_setting() {
        let body = json!({"name": "Soup", "price": 450, "catalogueId": OTHER_CATALOGUE});

        let (store, strict) = app_with_ownership(true);
        let (status, _, resp) = send(&strict, "POST", "/providers/1/menu", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(resp["errors"]["CatalogueId"].is_array());
        assert_eq!(store.item_count(), 0);

        let (store, loose) = app_with_ownership(false);
        let (status, _, _) = send(&loose, "POST", "/providers/1/menu", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(store.item_count(), 1);
    }

    // ── Get ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_unknown_item_or_provider_is_404() {
        let (_, app) = app();
        let id = create(&app, PROVIDER, "Soup", CATALOGUE).await;

        let (status, _, _) = send(&app, "GET", "/providers/1/menu/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = send(&app, "GET", &format!("/providers/404/menu/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn item_of_another_provider_depends_on_ownership_setting() {
        let (_, strict) = app_with_ownership(true);
        let id = create(&strict, OTHER_PROVIDER, "Steak", OTHER_CATALOGUE).await;
        let (status, _, _) = send(&strict, "GET", &format!("/providers/1/menu/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, loose) = app_with_ownership(false);
        let id = create(&loose, OTHER_PROVIDER, "Steak", OTHER_CATALOGUE).await;
        let (status, _, body) = send(&loose, "GET", &format!("/providers/1/menu/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["providerId"], OTHER_PROVIDER);
    }

    // ── Update ──────────────────────────────────────────────────

    #[tokio::test]
    async fn update_with_mismatched_id_is_400_before_any_lookup() {
        let (_, app) = app();
        // Unknown provider and item: the id check still wins
        let (status, _, body) = send(
            &app,
            "PUT",
            "/providers/404/menu/7",
            Some(json!({"id": 8, "name": "Soup", "price": 1, "catalogueId": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["Identifier"][0], ID_MISMATCH);
    }

    #[tokio::test]
    async fn update_persists_new_values() {
        let (store, app) = app();
        let id = create(&app, PROVIDER, "Soup", CATALOGUE).await;

        let (status, _, body) = send(
            &app,
            "PUT",
            &format!("/providers/1/menu/{}", id),
            Some(json!({
                "id": id,
                "name": "Broth",
                "description": "Clear",
                "price": 300,
                "catalogueId": CATALOGUE
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());

        let item = store.item(id).unwrap();
        assert_eq!(item.name, "Broth");
        assert_eq!(item.description.as_deref(), Some("Clear"));
        assert_eq!(item.price, 300);
    }

    #[tokio::test]
    async fn update_may_keep_own_name_but_not_take_anothers() {
        let (_, app) = app();
        let soup = create(&app, PROVIDER, "Soup", CATALOGUE).await;
        create(&app, PROVIDER, "Salad", CATALOGUE).await;

        let (status, _, _) = send(
            &app,
            "PUT",
            &format!("/providers/1/menu/{}", soup),
            Some(json!({"id": soup, "name": "SOUP", "price": 500, "catalogueId": CATALOGUE})),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, body) = send(
            &app,
            "PUT",
            &format!("/providers/1/menu/{}", soup),
            Some(json!({"id": soup, "name": "salad", "price": 500, "catalogueId": CATALOGUE})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["Name"].is_array());
    }

    #[tokio::test]
    async fn update_of_unknown_item_or_provider_is_404_and_changes_nothing() {
        let (store, app) = app();
        let id = create(&app, PROVIDER, "Soup", CATALOGUE).await;
        let body = |id: i32| json!({"id": id, "name": "Renamed", "price": 1, "catalogueId": CATALOGUE});

        let (status, _, _) = send(&app, "PUT", "/providers/1/menu/999", Some(body(999))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) =
            send(&app, "PUT", &format!("/providers/404/menu/{}", id), Some(body(id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let item = store.item(id).unwrap();
        assert_eq!(item.name, "Soup");
        assert_eq!(item.price, 450);
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn loose_update_checks_names_within_owning_provider() {
        let (store, app) = app_with_ownership(false);
        create(&app, OTHER_PROVIDER, "Soup", OTHER_CATALOGUE).await;
        let steak = create(&app, OTHER_PROVIDER, "Steak", OTHER_CATALOGUE).await;

        // Reached through provider 1, but the item belongs to provider 2
        let (status, _, body) = send(
            &app,
            "PUT",
            &format!("/providers/1/menu/{}", steak),
            Some(json!({"id": steak, "name": "soup", "price": 500, "catalogueId": OTHER_CATALOGUE})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["Name"][0], DUPLICATE_NAME);
        assert_eq!(store.item(steak).unwrap().name, "Steak");
    }

    // ── Delete ──────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let (store, app) = app();
        let id = create(&app, PROVIDER, "Soup", CATALOGUE).await;
        let uri = format!("/providers/1/menu/{}", id);

        let (status, _, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(store.item_count(), 0);

        let (status, _, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_for_unknown_provider_is_404_and_keeps_item() {
        let (store, app) = app();
        let id = create(&app, PROVIDER, "Soup", CATALOGUE).await;

        let (status, _, _) = send(&app, "DELETE", &format!("/providers/404/menu/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn delete_of_another_providers_item_is_404_under_enforcement() {
        let (store, app) = app();
        let id = create(&app, OTHER_PROVIDER, "Steak", OTHER_CATALOGUE).await;

        let (status, _, _) = send(&app, "DELETE", &format!("/providers/1/menu/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.item_count(), 1);
    }
}
