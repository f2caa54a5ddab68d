use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{
            AddFavoriteCharacterDto, AddFavoritePlanetDto, AddFavoriteShipDto,
            FavoriteCharacterDto, FavoritePlanetDto, FavoriteShipDto,
        },
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Favorite a character for a user
///
/// # Responses
/// - 200 (OK): The new favorite with its description
/// - 400 (Bad Request): Malformed body or missing `user_id` / `character_id`
/// - 404 (Not Found): User or character does not exist
/// - 409 (Conflict): The user already favorited this character
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/favorites/character",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteCharacterDto,
    responses(
        (status = 200, description = "Favorite added", body = FavoriteCharacterDto),
        (status = 400, description = "Missing user_id or character_id", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoriteCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    let favorite = FavoriteService::new(&state.db).add_character(dto).await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Favorite a planet for a user
#[utoipa::path(
    post,
    path = "/favorites/planet",
    tag = FAVORITE_TAG,
    request_body = AddFavoritePlanetDto,
    responses(
        (status = 200, description = "Favorite added", body = FavoritePlanetDto),
        (status = 400, description = "Missing user_id or planet_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoritePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    let favorite = FavoriteService::new(&state.db).add_planet(dto).await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Favorite a ship for a user
#[utoipa::path(
    post,
    path = "/favorites/ship",
    tag = FAVORITE_TAG,
    request_body = AddFavoriteShipDto,
    responses(
        (status = 200, description = "Favorite added", body = FavoriteShipDto),
        (status = 400, description = "Missing user_id or ship_id", body = ErrorDto),
        (status = 404, description = "User or ship not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_ship(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoriteShipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    let favorite = FavoriteService::new(&state.db).add_ship(dto).await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Remove a favorite character by the favorite's ID, not the character's
#[utoipa::path(
    delete,
    path = "/favorites/character/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteCharacterDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let favorite = FavoriteService::new(&state.db).remove_character(id).await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Remove a favorite planet by the favorite's ID
#[utoipa::path(
    delete,
    path = "/favorites/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite removed", body = FavoritePlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let favorite = FavoriteService::new(&state.db).remove_planet(id).await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Remove a favorite ship by the favorite's ID
#[utoipa::path(
    delete,
    path = "/favorites/ship/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Favorite ID")),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteShipDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_ship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let favorite = FavoriteService::new(&state.db).remove_ship(id).await?;

    Ok((StatusCode::OK, Json(favorite)))
}
