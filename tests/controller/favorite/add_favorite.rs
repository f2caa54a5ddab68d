use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    model::{
        api::ErrorDto,
        favorite::{
            AddFavoriteCharacterDto, AddFavoritePlanetDto, AddFavoriteShipDto,
            FavoriteCharacterDto, FavoritePlanetDto,
        },
    },
    server::controller::favorite::{
        add_favorite_character, add_favorite_planet, add_favorite_ship,
    },
};
use sea_orm::EntityTrait;

use super::*;

#[tokio::test]
async fn adds_favorite_planet_with_description() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@rebels.org")
        .with_planet("Tatooine")
        .build()
        .await?;
    let dto = AddFavoritePlanetDto {
        user_id: Some(1),
        planet_id: Some(1),
    };

    let resp = add_favorite_planet(State(test.state()), Ok(Json(dto)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let favorite: FavoritePlanetDto = body_json(resp).await;
    assert_eq!(favorite.id, 1);
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.planet_id, 1);
    assert_eq!(favorite.description, "luke@rebels.org likes Tatooine");

    Ok(())
}

/// Expect a 404 for an unknown user and no favorite row to be created
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character("Yoda").build().await?;
    let dto = AddFavoriteCharacterDto {
        user_id: Some(999),
        character_id: Some(1),
    };

    let result = add_favorite_character(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    let favorites = entity::prelude::FavoriteCharacter::find()
        .all(&test.db)
        .await?;
    assert!(favorites.is_empty());

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_ship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("han@falcon.net").build().await?;
    let dto = AddFavoriteShipDto {
        user_id: Some(1),
        ship_id: Some(2),
    };

    let result = add_favorite_ship(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Ship not found");

    Ok(())
}

/// Expect the second identical request to conflict while the first row stays
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@rebels.org")
        .with_character("Yoda")
        .build()
        .await?;
    let dto = AddFavoriteCharacterDto {
        user_id: Some(1),
        character_id: Some(1),
    };

    let resp = add_favorite_character(State(test.state()), Ok(Json(dto.clone())))
        .await
        .unwrap()
        .into_response();
    let first: FavoriteCharacterDto = body_json(resp).await;
    assert_eq!(first.description, "luke@rebels.org likes Yoda");

    let result = add_favorite_character(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite already exists");

    let favorites = entity::prelude::FavoriteCharacter::find()
        .all(&test.db)
        .await?;
    assert_eq!(favorites.len(), 1);

    Ok(())
}

#[tokio::test]
async fn fails_for_missing_user_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let dto = AddFavoritePlanetDto {
        user_id: None,
        planet_id: Some(1),
    };

    let result = add_favorite_planet(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: user_id");

    Ok(())
}
