//! Serialized views returned by the API.
//!
//! Every DTO here is a flat JSON projection of a stored row or a thin envelope around
//! one. Absent optional attributes serialize as `null`.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
