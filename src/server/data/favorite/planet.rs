use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{PlanetModel, FavoritePlanetModel};

pub struct FavoritePlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePlanetRepository<'a, C> {
    /// Creates a new instance of [`FavoritePlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a user to a planet
    ///
    /// Fails with a unique constraint violation if the pair is already linked.
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_and_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<FavoritePlanetModel>, DbErr> {
        entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Gets the planets favorited by a user, in the order they were favorited
    pub async fn get_planets_by_user_id(&self, user_id: i32) -> Result<Vec<PlanetModel>, DbErr> {
        let favorites = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, planet)| planet)
            .collect())
    }

    /// Deletes a favorite by its own ID
    ///
    /// # Returns
    /// - `Ok(Some(FavoritePlanetModel))` - The row as it was before deletion
    /// - `Ok(None)` - No row with the provided ID exists
    pub async fn delete(&self, favorite_id: i32) -> Result<Option<FavoritePlanetModel>, DbErr> {
        let Some(row) = self.get_by_id(favorite_id).await? else {
            return Ok(None);
        };

        entity::prelude::FavoritePlanet::delete_by_id(row.id)
            .exec(self.db)
            .await?;

        Ok(Some(row))
    }
}
