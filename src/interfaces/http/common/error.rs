//! HTTP error type
//!
//! Every handler returns `Result<_, ApiError>`. Storage faults are logged
//! and reported with a fixed message; their details never reach the client.

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

use super::ApiResponse;
use crate::domain::DomainError;

pub const GENERIC_FAILURE: &str = "Failed to succeed the operation!";
pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

#[derive(Debug)]
pub enum ApiError {
    /// 404
    NotFound(String),
    /// 400 with every accumulated field error
    Validation(ValidationErrors),
    /// 500: a write reported success but produced no id
    PersistenceFailure,
    /// 500
    Unhandled,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Single-field validation failure.
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        add_field_error(&mut errors, field, message);
        ApiError::Validation(errors)
    }
}

/// Record a business-rule failure under `field` (already PascalCase).
pub fn add_field_error(errors: &mut ValidationErrors, field: &'static str, message: impl Into<String>) {
    let mut err = ValidationError::new("business_rule");
    err.message = Some(Cow::Owned(message.into()));
    errors.add(field, err);
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::Validation { field, message } => ApiError::field(field, message),
            DomainError::Storage(details) => {
                error!("Unhandled storage error: {}", details);
                ApiError::Unhandled
            }
        }
    }
}

/// Body of a 400 response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationProblem {
    pub success: bool,
    /// Always `null`
    pub data: Option<String>,
    #[schema(example = "One or more validation errors occurred.")]
    pub error: String,
    /// Messages keyed by PascalCase field name
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationProblem {
    fn from(errors: &ValidationErrors) -> Self {
        let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, errs) in errors.field_errors().iter() {
            let key = pascal_case(&field.to_string());
            let messages = errs.iter().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid ({}).", key, e.code))
            });
            by_field.entry(key.clone()).or_default().extend(messages);
        }

        Self {
            success: false,
            data: None,
            error: VALIDATION_TITLE.to_string(),
            errors: by_field,
        }
    }
}

/// `catalogue_id` -> `CatalogueId`; names already in PascalCase are unchanged.
fn pascal_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(message))).into_response()
            }
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationProblem::from(&errors))).into_response()
            }
            ApiError::PersistenceFailure | ApiError::Unhandled => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(GENERIC_FAILURE)),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(pascal_case("catalogue_id"), "CatalogueId");
        assert_eq!(pascal_case("name"), "Name");
        assert_eq!(pascal_case("CatalogueId"), "CatalogueId");
    }

    #[tokio::test]
    async fn accumulated_errors_render_by_field() {
        let mut errors = ValidationErrors::new();
        add_field_error(&mut errors, "Name", "duplicate");
        add_field_error(&mut errors, "CatalogueId", "missing");

        let resp = ApiError::Validation(errors).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], VALIDATION_TITLE);
        assert_eq!(json["errors"]["Name"][0], "duplicate");
        assert_eq!(json["errors"]["CatalogueId"][0], "missing");
    }

    #[tokio::test]
    async fn derived_validation_keys_are_pascal_case() {
        #[derive(Validate)]
        struct Body {
            #[validate(range(min = 0))]
            unit_price: i32,
        }

        let errors = Body { unit_price: -1 }.validate().unwrap_err();
        let json = body_json(ApiError::Validation(errors).into_response()).await;
        assert!(json["errors"]["UnitPrice"].is_array());
    }

    #[tokio::test]
    async fn storage_error_is_hidden_behind_generic_message() {
        let resp = ApiError::from(DomainError::Storage("disk on fire".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(resp).await;
        assert_eq!(json["error"], GENERIC_FAILURE);
        assert!(!json.to_string().contains("disk on fire"));
    }

    #[tokio::test]
    async fn not_found_uses_envelope() {
        let resp = ApiError::from(DomainError::not_found("Provider", "id", 9)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "Not found: Provider with id=9");
    }

    #[tokio::test]
    async fn persistence_failure_is_500() {
        let resp = ApiError::PersistenceFailure.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
