use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A business rule rejected the request. `field` names the offending
    /// input in the PascalCase form clients see.
    #[error("Validation: {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_key() {
        let err = DomainError::not_found("CatalogueItem", "id", 42);
        assert_eq!(err.to_string(), "Not found: CatalogueItem with id=42");
    }

    #[test]
    fn validation_message_names_field() {
        let err = DomainError::validation("CatalogueId", "Catalogue 9 does not exist");
        assert_eq!(
            err.to_string(),
            "Validation: CatalogueId: Catalogue 9 does not exist"
        );
    }
}
