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
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/character",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Every character ordered by ID", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let character = CharacterService::new(&state.db).get_character(id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
///
/// Every field is required and `name` must not be empty.
///
/// # Responses
/// - 200 (OK): Character created, body is a confirmation message
/// - 400 (Bad Request): Malformed body, missing field or empty name
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/character",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = String),
        (status = 400, description = "Missing required field or empty name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    CharacterService::new(&state.db).create_character(dto).await?;

    Ok((StatusCode::OK, Json("Character created successfully")))
}

/// Delete a character by ID, returning the deleted character
#[utoipa::path(
    delete,
    path = "/character/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = CharacterDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let character = CharacterService::new(&state.db).delete_character(id).await?;

    Ok((StatusCode::OK, Json(character)))
}
