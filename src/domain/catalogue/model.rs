//! Catalogue domain entity

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    pub id: i32,
    pub name: String,
    /// Owning provider
    pub provider_id: i32,
}

impl Catalogue {
    pub fn new(id: i32, name: impl Into<String>, provider_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            provider_id,
        }
    }

    pub fn is_owned_by(&self, provider_id: i32) -> bool {
        self.provider_id == provider_id
    }
}
