use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{ShipModel, FavoriteShipModel};

pub struct FavoriteShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteShipRepository<'a, C> {
    /// Creates a new instance of [`FavoriteShipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a user to a ship
    ///
    /// Fails with a unique constraint violation if the pair is already linked.
    pub async fn create(
        &self,
        user_id: i32,
        ship_id: i32,
    ) -> Result<FavoriteShipModel, DbErr> {
        let favorite = entity::favorite_ship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            ship_id: ActiveValue::Set(ship_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoriteShipModel>, DbErr> {
        entity::prelude::FavoriteShip::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_and_ship(
        &self,
        user_id: i32,
        ship_id: i32,
    ) -> Result<Option<FavoriteShipModel>, DbErr> {
        entity::prelude::FavoriteShip::find()
            .filter(entity::favorite_ship::Column::UserId.eq(user_id))
            .filter(entity::favorite_ship::Column::ShipId.eq(ship_id))
            .one(self.db)
            .await
    }

    /// Gets the ships favorited by a user, in the order they were favorited
    pub async fn get_ships_by_user_id(&self, user_id: i32) -> Result<Vec<ShipModel>, DbErr> {
        let favorites = entity::prelude::FavoriteShip::find()
            .filter(entity::favorite_ship::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_ship::Column::Id)
            .find_also_related(entity::prelude::Ship)
            .all(self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, ship)| ship)
            .collect())
    }

    /// Deletes a favorite by its own ID
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteShipModel))` - The row as it was before deletion
    /// - `Ok(None)` - No row with the provided ID exists
    pub async fn delete(&self, favorite_id: i32) -> Result<Option<FavoriteShipModel>, DbErr> {
        let Some(row) = self.get_by_id(favorite_id).await? else {
            return Ok(None);
        };

        entity::prelude::FavoriteShip::delete_by_id(row.id)
            .exec(self.db)
            .await?;

        Ok(Some(row))
    }
}
