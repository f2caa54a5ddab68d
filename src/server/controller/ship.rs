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
        ship::{ShipDto, CreateShipDto},
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::ship::ShipService,
    },
};

pub static SHIP_TAG: &str = "ship";

/// List all ships
#[utoipa::path(
    get,
    path = "/ship",
    tag = SHIP_TAG,
    responses(
        (status = 200, description = "Every ship ordered by ID", body = Vec<ShipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ships = ShipService::new(&state.db).get_ships().await?;

    Ok((StatusCode::OK, Json(ships)))
}

/// Get a ship by ID
#[utoipa::path(
    get,
    path = "/ship/{id}",
    tag = SHIP_TAG,
    params(("id" = i32, Path, description = "Ship ID")),
    responses(
        (status = 200, description = "Ship found", body = ShipDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let ship = ShipService::new(&state.db).get_ship(id).await?;

    Ok((StatusCode::OK, Json(ship)))
}

/// Create a ship
///
/// Every field is required and `name` must not be empty, numeric fields take integers.
#[utoipa::path(
    post,
    path = "/ship",
    tag = SHIP_TAG,
    request_body = CreateShipDto,
    responses(
        (status = 200, description = "Ship created", body = String),
        (status = 400, description = "Missing required field or empty name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ship(
    State(state): State<AppState>,
    payload: Result<Json<CreateShipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(dto) = payload.map_err(ValidationError::from)?;

    ShipService::new(&state.db).create_ship(dto).await?;

    Ok((StatusCode::OK, Json("Ship created successfully")))
}

/// Delete a ship by ID, returning the deleted ship
#[utoipa::path(
    delete,
    path = "/ship/{id}",
    tag = SHIP_TAG,
    params(("id" = i32, Path, description = "Ship ID")),
    responses(
        (status = 200, description = "Ship deleted", body = ShipDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Ship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ValidationError::from)?;

    let ship = ShipService::new(&state.db).delete_ship(id).await?;

    Ok((StatusCode::OK, Json(ship)))
}
