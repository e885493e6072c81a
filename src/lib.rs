//! # FoodPal Providers
//!
//! REST service managing the catalogue (menu) items of food providers.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, repository traits and the unit of work
//! - **application**: Services implementing the catalogue item use cases
//! - **infrastructure**: SeaORM database adapter and in-memory store
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error types and shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmUnitOfWorkFactory};

// Re-export API router
pub use interfaces::http::create_api_router;
