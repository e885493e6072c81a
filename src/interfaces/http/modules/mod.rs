pub mod catalogue_items;
pub mod health;
