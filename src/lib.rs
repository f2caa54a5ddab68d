//! Holocron: a REST API over Star Wars characters, planets and ships, with
//! per-user favorites.

pub mod model;
pub mod server;
