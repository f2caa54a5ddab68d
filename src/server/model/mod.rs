//! Server application models and type definitions.
//!
//! Application state, database model type aliases, validated inputs handed from services
//! to repositories, and the favorite kind discriminator.

pub mod app;
pub mod db;
pub mod favorite;
pub mod resource;
