//! Tests for the ship endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        api::ErrorDto,
        ship::{CreateShipDto, ShipDto},
    },
    server::controller::ship::{create_ship, delete_ship, get_ship, get_ships},
};

use super::*;

fn falcon() -> CreateShipDto {
    CreateShipDto {
        name: Some(Some("Millennium Falcon".to_string())),
        model: Some(Some("YT-1300 light freighter".to_string())),
        manufacturer: Some(Some("Corellian Engineering Corporation".to_string())),
        cost_in_credits: Some(Some(100_000)),
        crew: Some(Some(4)),
    }
}

#[tokio::test]
async fn create_then_list() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = create_ship(State(test.state()), Ok(Json(falcon())))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: String = body_json(resp).await;
    assert_eq!(message, "Ship created successfully");

    let resp = get_ships(State(test.state()))
        .await
        .unwrap()
        .into_response();
    let ships: Vec<ShipDto> = body_json(resp).await;
    assert_eq!(ships.len(), 1);
    assert_eq!(ships[0].name.as_deref(), Some("Millennium Falcon"));
    assert_eq!(ships[0].cost_in_credits, Some(100_000));
    assert_eq!(ships[0].crew, Some(4));

    Ok(())
}

#[tokio::test]
async fn create_fails_for_missing_model() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let dto = CreateShipDto {
        model: None,
        ..falcon()
    };

    let result = create_ship(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: model");

    Ok(())
}

#[tokio::test]
async fn create_fails_for_empty_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let dto = CreateShipDto {
        name: Some(Some(String::new())),
        ..falcon()
    };

    let result = create_ship(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn get_and_delete_ship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_ship("Slave I").build().await?;

    let resp = get_ship(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();
    let ship: ShipDto = body_json(resp).await;
    assert_eq!(ship.name.as_deref(), Some("Slave I"));

    let resp = delete_ship(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_ship(State(test.state()), Ok(Path(1))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Ship not found");

    Ok(())
}
