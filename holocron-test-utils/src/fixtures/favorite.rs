use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct FavoriteFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite_character::Model, DbErr> {
        entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite_planet::Model, DbErr> {
        entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn insert_favorite_ship(
        &self,
        user_id: i32,
        ship_id: i32,
    ) -> Result<entity::favorite_ship::Model, DbErr> {
        entity::favorite_ship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            ship_id: ActiveValue::Set(ship_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
