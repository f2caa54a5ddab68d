//! Test fixture modules.
//!
//! - `user` - user accounts
//! - `resource` - characters, planets and ships
//! - `favorite` - favorite join rows
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod favorite;
pub mod resource;
pub mod user;
