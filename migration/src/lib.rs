pub use sea_orm_migration::prelude::*;

mod m20251101_000001_user;
mod m20251101_000002_character;
mod m20251101_000003_planet;
mod m20251101_000004_ship;
mod m20251101_000005_favorite_character;
mod m20251101_000006_favorite_planet;
mod m20251101_000007_favorite_ship;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_user::Migration),
            Box::new(m20251101_000002_character::Migration),
            Box::new(m20251101_000003_planet::Migration),
            Box::new(m20251101_000004_ship::Migration),
            Box::new(m20251101_000005_favorite_character::Migration),
            Box::new(m20251101_000006_favorite_planet::Migration),
            Box::new(m20251101_000007_favorite_ship::Migration),
        ]
    }
}
