use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{
        data::character::CharacterRepository,
        error::{resource::ResourceError, Error},
        model::resource::NewCharacter,
    },
};

/// Service for listing, creating and deleting characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    pub async fn get_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;

        Ok(character.into())
    }

    /// Validates the request and inserts a new character.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The created character
    /// - `Err(Error::ValidationError)` - A required field is absent or the name is empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_character(&self, dto: CreateCharacterDto) -> Result<CharacterDto, Error> {
        let new_character = NewCharacter::try_from(dto)?;

        let character = CharacterRepository::new(self.db)
            .create(new_character)
            .await?;

        tracing::info!(character_id = %character.id, "Created character {}", character.name);

        Ok(character.into())
    }

    /// Deletes a character and returns it as it was before deletion.
    pub async fn delete_character(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .delete(character_id)
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;

        tracing::info!(character_id = %character.id, "Deleted character {}", character.name);

        Ok(character.into())
    }
}
