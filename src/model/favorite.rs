use serde::{Deserialize, Serialize};

use crate::{
    model::{character::CharacterDto, planet::PlanetDto, ship::ShipDto},
    server::model::db::{
        CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, FavoriteShipModel,
        PlanetModel, ShipModel, UserModel,
    },
};

/// Builds the display text shown alongside a favorite, e.g. `luke@rebels.org likes Tatooine`
pub fn describe_favorite(email: &str, target_name: &str) -> String {
    format!("{} likes {}", email, target_name)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
    pub description: String,
}

impl FavoriteCharacterDto {
    pub fn new(
        favorite: &FavoriteCharacterModel,
        user: &UserModel,
        character: &CharacterModel,
    ) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
            description: describe_favorite(&user.email, &character.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
    pub description: String,
}

impl FavoritePlanetDto {
    pub fn new(favorite: &FavoritePlanetModel, user: &UserModel, planet: &PlanetModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            description: describe_favorite(&user.email, &planet.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteShipDto {
    pub id: i32,
    pub user_id: i32,
    pub ship_id: i32,
    pub description: String,
}

impl FavoriteShipDto {
    pub fn new(favorite: &FavoriteShipModel, user: &UserModel, ship: &ShipModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            ship_id: favorite.ship_id,
            description: describe_favorite(&user.email, ship.name.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddFavoriteCharacterDto {
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddFavoritePlanetDto {
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddFavoriteShipDto {
    pub user_id: Option<i32>,
    pub ship_id: Option<i32>,
}

/// Everything a user has favorited, grouped by kind
///
/// Every kind is always present, as an empty list when the user has no favorites of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub character: Vec<CharacterDto>,
    pub planet: Vec<PlanetDto>,
    pub ship: Vec<ShipDto>,
}
