//! HTTP request handlers.
//!
//! Each submodule exposes axum handlers annotated with `utoipa::path` and a tag
//! constant used to group them in the OpenAPI document. Handlers stay thin: they
//! extract path parameters, call the matching service and wrap the result in the
//! response DTO.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod vehicle;
