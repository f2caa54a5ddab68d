//! Tests for the character endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto},
    },
    server::controller::character::{
        create_character, delete_character, get_character, get_characters,
    },
};

use super::*;

fn luke() -> CreateCharacterDto {
    CreateCharacterDto {
        name: Some(Some("Luke".to_string())),
        birth_year: Some(Some("19BBY".to_string())),
        gender: Some(Some("male".to_string())),
        height: Some(Some("172".to_string())),
        skin_color: Some(Some("fair".to_string())),
        eye_color: Some(Some("blue".to_string())),
    }
}

/// Expect a created character to show up in the list with its fields intact
#[tokio::test]
async fn create_then_list() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_character(State(test.state()), Ok(Json(luke()))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: String = body_json(resp).await;
    assert_eq!(message, "Character created successfully");

    let resp = get_characters(State(test.state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterDto> = body_json(resp).await;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Luke");
    assert_eq!(characters[0].birth_year.as_deref(), Some("19BBY"));

    Ok(())
}

#[tokio::test]
async fn list_is_empty_without_characters() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = get_characters(State(test.state()))
        .await
        .unwrap()
        .into_response();

    let characters: Vec<CharacterDto> = body_json(resp).await;
    assert!(characters.is_empty());

    Ok(())
}

#[tokio::test]
async fn create_fails_for_missing_field() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let dto = CreateCharacterDto {
        gender: None,
        ..luke()
    };

    let result = create_character(State(test.state()), Ok(Json(dto))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: gender");

    Ok(())
}

/// Expect an empty name to be rejected and nothing to be inserted
#[tokio::test]
async fn create_fails_for_empty_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let dto = CreateCharacterDto {
        name: Some(Some(String::new())),
        ..luke()
    };

    let result = create_character(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Name cannot be empty");

    let resp = get_characters(State(test.state()))
        .await
        .unwrap()
        .into_response();
    let characters: Vec<CharacterDto> = body_json(resp).await;
    assert!(characters.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_returns_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character("Leia").build().await?;

    let resp = get_character(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let character: CharacterDto = body_json(resp).await;
    assert_eq!(character.id, 1);
    assert_eq!(character.name, "Leia");

    Ok(())
}

#[tokio::test]
async fn get_fails_for_nonexistent_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_character(State(test.state()), Ok(Path(42))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Character not found");

    Ok(())
}

/// Expect the deleted character in the response and a 404 on the next lookup
#[tokio::test]
async fn delete_returns_deleted_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_character("Han").build().await?;

    let resp = delete_character(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let character: CharacterDto = body_json(resp).await;
    assert_eq!(character.name, "Han");

    let result = get_character(State(test.state()), Ok(Path(1))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_fails_for_nonexistent_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = delete_character(State(test.state()), Ok(Path(1))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a database error to surface as a generic 500 response
#[tokio::test]
async fn list_fails_without_tables() -> Result<(), TestError> {
    let test = test_setup!()?;

    let result = get_characters(State(test.state())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}
