use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    model::favorite::{
        AddFavoriteCharacterDto, AddFavoritePlanetDto, AddFavoriteShipDto, FavoriteCharacterDto,
        FavoritePlanetDto, FavoriteShipDto, UserFavoritesDto,
    },
    server::{
        data::{
            character::CharacterRepository,
            favorite::{
                character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
                ship::FavoriteShipRepository,
            },
            is_unique_violation,
            planet::PlanetRepository,
            ship::ShipRepository,
            user::UserRepository,
        },
        error::{favorite::FavoriteError, resource::ResourceError, Error},
        model::{db::UserModel, favorite::FavoriteKind},
        util::validate::require,
    },
};

/// Service for adding, removing and listing user favorites.
///
/// Adding a favorite checks, in order, that the user exists, that the target exists and that
/// the pair is not already linked. The unique index on each favorite table backs up the
/// last check when two requests race.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every character, planet and ship the user has favorited.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - Favorites grouped by kind, empty lists for kinds without any
    /// - `Err(Error::ResourceError(ResourceError::UserNotFound))` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        self.find_user(user_id).await?;

        let character = FavoriteCharacterRepository::new(self.db)
            .get_characters_by_user_id(user_id)
            .await?;
        let planet = FavoritePlanetRepository::new(self.db)
            .get_planets_by_user_id(user_id)
            .await?;
        let ship = FavoriteShipRepository::new(self.db)
            .get_ships_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            character: character.into_iter().map(Into::into).collect(),
            planet: planet.into_iter().map(Into::into).collect(),
            ship: ship.into_iter().map(Into::into).collect(),
        })
    }

    /// Favorites a character for a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The new favorite with its description
    /// - `Err(Error::ValidationError)` - `user_id` or `character_id` missing from the request
    /// - `Err(Error::ResourceError)` - User or character not found
    /// - `Err(Error::FavoriteError(FavoriteError::AlreadyExists))` - Pair already linked
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_character(
        &self,
        dto: AddFavoriteCharacterDto,
    ) -> Result<FavoriteCharacterDto, Error> {
        let user_id = require("user_id", dto.user_id)?;
        let character_id = require("character_id", dto.character_id)?;

        let user = self.find_user(user_id).await?;
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;

        let favorite_repo = FavoriteCharacterRepository::new(self.db);
        let already_exists = FavoriteError::AlreadyExists {
            kind: FavoriteKind::Character,
            user_id,
            target_id: character_id,
        };

        if favorite_repo
            .get_by_user_and_character(user_id, character_id)
            .await?
            .is_some()
        {
            return Err(already_exists.into());
        }

        let favorite = favorite_repo
            .create(user_id, character_id)
            .await
            .map_err(|err| conflict_or_db(err, already_exists))?;

        tracing::info!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            character_id = %character_id,
            "Added favorite character"
        );

        Ok(FavoriteCharacterDto::new(&favorite, &user, &character))
    }

    /// Favorites a planet for a user, see [`FavoriteService::add_character`] for the checks made.
    pub async fn add_planet(&self, dto: AddFavoritePlanetDto) -> Result<FavoritePlanetDto, Error> {
        let user_id = require("user_id", dto.user_id)?;
        let planet_id = require("planet_id", dto.planet_id)?;

        let user = self.find_user(user_id).await?;
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        let favorite_repo = FavoritePlanetRepository::new(self.db);
        let already_exists = FavoriteError::AlreadyExists {
            kind: FavoriteKind::Planet,
            user_id,
            target_id: planet_id,
        };

        if favorite_repo
            .get_by_user_and_planet(user_id, planet_id)
            .await?
            .is_some()
        {
            return Err(already_exists.into());
        }

        let favorite = favorite_repo
            .create(user_id, planet_id)
            .await
            .map_err(|err| conflict_or_db(err, already_exists))?;

        tracing::info!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            planet_id = %planet_id,
            "Added favorite planet"
        );

        Ok(FavoritePlanetDto::new(&favorite, &user, &planet))
    }

    /// Favorites a ship for a user, see [`FavoriteService::add_character`] for the checks made.
    pub async fn add_ship(&self, dto: AddFavoriteShipDto) -> Result<FavoriteShipDto, Error> {
        let user_id = require("user_id", dto.user_id)?;
        let ship_id = require("ship_id", dto.ship_id)?;

        let user = self.find_user(user_id).await?;
        let ship = ShipRepository::new(self.db)
            .get_by_id(ship_id)
            .await?
            .ok_or(ResourceError::ShipNotFound(ship_id))?;

        let favorite_repo = FavoriteShipRepository::new(self.db);
        let already_exists = FavoriteError::AlreadyExists {
            kind: FavoriteKind::Ship,
            user_id,
            target_id: ship_id,
        };

        if favorite_repo
            .get_by_user_and_ship(user_id, ship_id)
            .await?
            .is_some()
        {
            return Err(already_exists.into());
        }

        let favorite = favorite_repo
            .create(user_id, ship_id)
            .await
            .map_err(|err| conflict_or_db(err, already_exists))?;

        tracing::info!(
            favorite_id = %favorite.id,
            user_id = %user_id,
            ship_id = %ship_id,
            "Added favorite ship"
        );

        Ok(FavoriteShipDto::new(&favorite, &user, &ship))
    }

    /// Removes a favorite character by the favorite's own ID, returning the removed favorite.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterDto)` - The favorite as it was before removal
    /// - `Err(Error::FavoriteError(FavoriteError::NotFound))` - No favorite with this ID
    /// - `Err(Error::InternalError)` - The favorite references a missing row
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_character(&self, favorite_id: i32) -> Result<FavoriteCharacterDto, Error> {
        let favorite = FavoriteCharacterRepository::new(self.db)
            .delete(favorite_id)
            .await?
            .ok_or(FavoriteError::NotFound {
                kind: FavoriteKind::Character,
                id: favorite_id,
            })?;

        let user = self.favorite_owner(favorite.user_id, favorite_id).await?;
        let character = CharacterRepository::new(self.db)
            .get_by_id(favorite.character_id)
            .await?
            .ok_or_else(|| dangling_favorite(FavoriteKind::Character, favorite_id))?;

        tracing::info!(favorite_id = %favorite.id, "Removed favorite character");

        Ok(FavoriteCharacterDto::new(&favorite, &user, &character))
    }

    /// Removes a favorite planet by the favorite's own ID, returning the removed favorite.
    pub async fn remove_planet(&self, favorite_id: i32) -> Result<FavoritePlanetDto, Error> {
        let favorite = FavoritePlanetRepository::new(self.db)
            .delete(favorite_id)
            .await?
            .ok_or(FavoriteError::NotFound {
                kind: FavoriteKind::Planet,
                id: favorite_id,
            })?;

        let user = self.favorite_owner(favorite.user_id, favorite_id).await?;
        let planet = PlanetRepository::new(self.db)
            .get_by_id(favorite.planet_id)
            .await?
            .ok_or_else(|| dangling_favorite(FavoriteKind::Planet, favorite_id))?;

        tracing::info!(favorite_id = %favorite.id, "Removed favorite planet");

        Ok(FavoritePlanetDto::new(&favorite, &user, &planet))
    }

    /// Removes a favorite ship by the favorite's own ID, returning the removed favorite.
    pub async fn remove_ship(&self, favorite_id: i32) -> Result<FavoriteShipDto, Error> {
        let favorite = FavoriteShipRepository::new(self.db)
            .delete(favorite_id)
            .await?
            .ok_or(FavoriteError::NotFound {
                kind: FavoriteKind::Ship,
                id: favorite_id,
            })?;

        let user = self.favorite_owner(favorite.user_id, favorite_id).await?;
        let ship = ShipRepository::new(self.db)
            .get_by_id(favorite.ship_id)
            .await?
            .ok_or_else(|| dangling_favorite(FavoriteKind::Ship, favorite_id))?;

        tracing::info!(favorite_id = %favorite.id, "Removed favorite ship");

        Ok(FavoriteShipDto::new(&favorite, &user, &ship))
    }

    async fn find_user(&self, user_id: i32) -> Result<UserModel, Error> {
        let user = UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        Ok(user)
    }

    /// The owner of an existing favorite, the foreign key guarantees it exists
    async fn favorite_owner(&self, user_id: i32, favorite_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Favorite ID {} references user ID {} which does not exist",
                    favorite_id, user_id
                ))
            })
    }
}

/// Maps a unique index violation on insert to the favorite conflict, anything else stays a database error.
fn conflict_or_db(err: DbErr, already_exists: FavoriteError) -> Error {
    if is_unique_violation(&err) {
        already_exists.into()
    } else {
        err.into()
    }
}

fn dangling_favorite(kind: FavoriteKind, favorite_id: i32) -> Error {
    Error::InternalError(format!(
        "Favorite {} ID {} references a {} which does not exist",
        kind, favorite_id, kind
    ))
}
