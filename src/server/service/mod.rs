//! Service layer for business logic.
//!
//! Services validate request DTOs, check that referenced rows exist, enforce favorite
//! uniqueness and project database models into API DTOs. Each service borrows the
//! database connection from application state and builds repositories on demand.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod ship;
pub mod user;
