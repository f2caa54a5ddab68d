use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::{db::CharacterModel, resource::NewCharacter};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, character: NewCharacter) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            birth_year: ActiveValue::Set(character.birth_year),
            gender: ActiveValue::Set(character.gender),
            height: ActiveValue::Set(character.height),
            skin_color: ActiveValue::Set(character.skin_color),
            eye_color: ActiveValue::Set(character.eye_color),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets every character ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Deletes a character, returning the deleted row
    ///
    /// # Returns
    /// - `Ok(Some(CharacterModel))` - The character as it was before deletion
    /// - `Ok(None)` - No character with the provided ID exists
    pub async fn delete(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        let Some(character) = self.get_by_id(character_id).await? else {
            return Ok(None);
        };

        entity::prelude::Character::delete_by_id(character.id)
            .exec(self.db)
            .await?;

        Ok(Some(character))
    }
}
