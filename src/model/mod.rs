//! Public JSON representations exchanged with API clients.

pub mod api;
pub mod character;
pub mod favorite;
pub mod field;
pub mod planet;
pub mod ship;
pub mod user;
