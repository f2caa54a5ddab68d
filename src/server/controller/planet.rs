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
        planet::{PlanetDto, CreatePlanetDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planet";

/// List all planets
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Every planet ordered by ID", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let planet = PlanetService::new(&state.db).get_planet(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
///
/// Every field is required and `name` must not be empty.
#[utoipa::path(
    post,
    path = "/planet",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "Planet created", body = String),
        (status = 400, description = "Missing required field or empty name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    PlanetService::new(&state.db).create_planet(dto).await?;

    Ok((StatusCode::OK, Json("Planet created successfully")))
}

/// Delete a planet by ID, returning the deleted planet
#[utoipa::path(
    delete,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = PlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let planet = PlanetService::new(&state.db).delete_planet(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}
