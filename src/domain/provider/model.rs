//! Provider domain entity

/// A food provider (restaurant, kitchen, shop)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub id: i32,
    pub name: String,
}

impl Provider {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
