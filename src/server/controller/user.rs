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
        favorite::UserFavoritesDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user ordered by ID", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Register a user
///
/// `is_active` defaults to true when omitted. The password is stored but never returned.
///
/// # Responses
/// - 200 (OK): The created user
/// - 400 (Bad Request): Malformed body, or email or password missing or empty
/// - 409 (Conflict): Email already registered
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = UserDto),
        (status = 400, description = "Missing or empty email or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    let user = UserService::new(&state.db).create_user(dto).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user by ID along with all of their favorites
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = UserDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let user = UserService::new(&state.db).delete_user(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Get everything a user has favorited
///
/// The response always contains the `character`, `planet` and `ship` lists, empty when the
/// user has no favorites of that kind.
#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites grouped by kind", body = UserFavoritesDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let favorites = FavoriteService::new(&state.db).get_user_favorites(id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}
