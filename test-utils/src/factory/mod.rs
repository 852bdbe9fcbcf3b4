//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests. Names are made unique with a shared counter so the
//! unique `name` columns never collide between factory calls.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::create_user(&db).await?;
//!     let planet = factory::create_planet(&db).await?;
//!
//!     // Create a favorite linking the two
//!     let favorite = factory::create_favorite_planet(&db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let planet = factory::planet::PlanetFactory::new(&db)
//!     .name("Tatooine")
//!     .climate("arid")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use character::create_character;
pub use favorite::{create_favorite_character, create_favorite_planet, create_favorite_vehicle};
pub use planet::create_planet;
pub use user::create_user;
pub use vehicle::create_vehicle;
