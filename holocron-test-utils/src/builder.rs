//! Declarative test builder.
//!
//! Queue tables and fixtures with chained calls, then execute them all with `build()`.

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_tables: bool,

    users: Vec<String>,
    characters: Vec<String>,
    planets: Vec<String>,
    ships: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            ships: Vec::new(),
        }
    }

    /// Create every table by running all migrations during `build()`.
    pub fn with_tables(mut self) -> Self {
        self.include_tables = true;
        self
    }

    /// Insert a user with the provided email, implies `with_tables`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.include_tables = true;
        self.users.push(email.into());
        self
    }

    /// Insert a character with the provided name, implies `with_tables`.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.include_tables = true;
        self.characters.push(name.into());
        self
    }

    /// Insert a planet with the provided name, implies `with_tables`.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.include_tables = true;
        self.planets.push(name.into());
        self
    }

    /// Insert a ship with the provided name, implies `with_tables`.
    pub fn with_ship(mut self, name: impl Into<String>) -> Self {
        self.include_tables = true;
        self.ships.push(name.into());
        self
    }

    /// Build the test setup.
    ///
    /// Runs migrations if requested, then inserts fixtures in the order users, characters,
    /// planets, ships. Rows of each kind receive IDs starting at 1 in insertion order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Connection, migration or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        if self.include_tables {
            setup.with_tables().await?;
        }

        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.characters {
            setup.resource().insert_character(&name).await?;
        }

        for name in self.planets {
            setup.resource().insert_planet(&name).await?;
        }

        for name in self.ships {
            setup.resource().insert_ship(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
