use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteCharacterDto, FavoriteShipDto},
    },
    server::controller::favorite::{
        remove_favorite_character, remove_favorite_planet, remove_favorite_ship,
    },
};

use super::*;

#[tokio::test]
async fn removes_favorite_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@rebels.org")
        .with_character("Yoda")
        .build()
        .await?;
    let favorite = test.favorite().insert_favorite_character(1, 1).await?;

    let resp = remove_favorite_character(State(test.state()), Ok(Path(favorite.id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let removed: FavoriteCharacterDto = body_json(resp).await;
    assert_eq!(removed.id, favorite.id);
    assert_eq!(removed.description, "luke@rebels.org likes Yoda");

    let result = remove_favorite_character(State(test.state()), Ok(Path(favorite.id))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the favorite ID to be used rather than the ship ID
#[tokio::test]
async fn removes_favorite_ship_by_favorite_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("han@falcon.net")
        .with_ship("X-wing")
        .with_ship("Millennium Falcon")
        .build()
        .await?;
    test.favorite().insert_favorite_ship(1, 1).await?;
    let favorite = test.favorite().insert_favorite_ship(1, 2).await?;

    let resp = remove_favorite_ship(State(test.state()), Ok(Path(favorite.id)))
        .await
        .unwrap()
        .into_response();

    let removed: FavoriteShipDto = body_json(resp).await;
    assert_eq!(removed.id, 2);
    assert_eq!(removed.ship_id, 2);
    assert_eq!(removed.description, "han@falcon.net likes Millennium Falcon");

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = remove_favorite_planet(State(test.state()), Ok(Path(12))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite not found");

    Ok(())
}
