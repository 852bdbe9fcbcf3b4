//! SeaORM entities for the holocron schema.
//!
//! One module per table. `Favorite` is the only table carrying foreign keys; it links a
//! user to a character, vehicle or planet through nullable columns.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
