//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and exposes fixture helpers for inserting rows.

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{favorite::FavoriteFixtures, resource::ResourceFixtures, user::UserFixtures},
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_tables().build().await?;
///
/// let user = test.user().insert_user("luke@rebels.org").await?;
/// let planet = test.resource().insert_planet("Tatooine").await?;
/// test.favorite().insert_favorite_planet(user.id, planet.id).await?;
///
/// let app_state: AppState = test.state();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Connect to a fresh in-memory SQLite database without any tables.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Create every table by running all migrations.
    pub async fn with_tables(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }

    /// Convert the database connection into any type constructed from it
    ///
    /// This allows conversion to the server's `AppState` without a dependency from this
    /// crate on the server crate.
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Access user fixture helpers.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.db)
    }

    /// Access character, planet and ship fixture helpers.
    pub fn resource(&self) -> ResourceFixtures<'_> {
        ResourceFixtures::new(&self.db)
    }

    /// Access favorite fixture helpers.
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures::new(&self.db)
    }
}
