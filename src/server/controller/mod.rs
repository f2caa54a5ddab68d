//! HTTP controller endpoints for the Holocron web API.
//!
//! Axum handlers for users, characters, planets, ships and favorites. Handlers extract the
//! shared [`AppState`](crate::server::model::app::AppState), hand the request to a service
//! and map the result to a JSON response. Each handler is documented with utoipa.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod ship;
pub mod user;
