//! Server application core modules.
//!
//! HTTP routing, request handling, business rules and database access for the Holocron API.
//! Handlers receive the database connection through [`model::app::AppState`] and hand it to
//! services, which in turn borrow it to per-table repositories.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
