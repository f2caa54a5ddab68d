use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::{api::ErrorDto, favorite::UserFavoritesDto},
    server::controller::user::get_user_favorites,
};

use super::*;

/// Expect every kind as an empty array for a user without favorites
#[tokio::test]
async fn returns_empty_arrays_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("luke@rebels.org").build().await?;

    let resp = get_user_favorites(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(
        body,
        serde_json::json!({ "character": [], "planet": [], "ship": [] })
    );

    Ok(())
}

#[tokio::test]
async fn returns_favorited_entities() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@rebels.org")
        .with_user("leia@alderaan.gov")
        .with_character("Yoda")
        .with_ship("X-wing")
        .build()
        .await?;
    test.favorite().insert_favorite_character(1, 1).await?;
    test.favorite().insert_favorite_ship(1, 1).await?;
    test.favorite().insert_favorite_ship(2, 1).await?;

    let resp = get_user_favorites(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();

    let favorites: UserFavoritesDto = body_json(resp).await;
    assert_eq!(favorites.character.len(), 1);
    assert_eq!(favorites.character[0].name, "Yoda");
    assert!(favorites.planet.is_empty());
    assert_eq!(favorites.ship.len(), 1);
    assert_eq!(favorites.ship[0].name.as_deref(), Some("X-wing"));

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user_favorites(State(test.state()), Ok(Path(5))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}
