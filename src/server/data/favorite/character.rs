use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::{CharacterModel, FavoriteCharacterModel};

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a user to a character
    ///
    /// Fails with a unique constraint violation if the pair is already linked.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Gets the characters favorited by a user, in the order they were favorited
    pub async fn get_characters_by_user_id(&self, user_id: i32) -> Result<Vec<CharacterModel>, DbErr> {
        let favorites = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .find_also_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, character)| character)
            .collect())
    }

    /// Deletes a favorite by its own ID
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteCharacterModel))` - The row as it was before deletion
    /// - `Ok(None)` - No row with the provided ID exists
    pub async fn delete(&self, favorite_id: i32) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        let Some(row) = self.get_by_id(favorite_id).await? else {
            return Ok(None);
        };

        entity::prelude::FavoriteCharacter::delete_by_id(row.id)
            .exec(self.db)
            .await?;

        Ok(Some(row))
    }
}
