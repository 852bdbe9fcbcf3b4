//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Lookups**: Turning absent rows into `AppError::NotFound` with the message the
//!   API reports
//! - **Orchestration**: Checking that referenced users and targets exist before a
//!   favorite is written or removed
//! - **DTO Conversion**: Converting domain models into the DTOs returned by controllers

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
