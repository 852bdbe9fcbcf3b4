//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, so SeaORM types never leak into
//! handlers and wire types never leak into the data layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
