//! Holocron: a REST API serving Star Wars characters, planets and vehicles, plus
//! per-user favorites.

pub mod model;
pub mod server;
