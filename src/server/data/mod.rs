//! Data access layer repositories.
//!
//! One repository per table. Repositories borrow any SeaORM connection (`ConnectionTrait`),
//! so they work with the pooled `DatabaseConnection` as well as inside a transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod ship;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Returns true when the database rejected a write because of a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
