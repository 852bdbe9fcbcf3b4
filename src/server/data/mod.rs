//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and the service layer. Lookups that can
//! miss return `Option`; callers decide how an absent row is reported.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
