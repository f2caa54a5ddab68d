use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::controller::user::create_user,
};

use super::*;

fn new_user(email: &str) -> CreateUserDto {
    CreateUserDto {
        email: Some(email.to_string()),
        password: Some("use-the-force".to_string()),
        is_active: None,
    }
}

#[tokio::test]
async fn creates_active_user_by_default() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = create_user(State(test.state()), Ok(Json(new_user("rey@jakku.net"))))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "rey@jakku.net");
    assert!(user.is_active);

    Ok(())
}

#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("rey@jakku.net").build().await?;

    let result = create_user(State(test.state()), Ok(Json(new_user("rey@jakku.net")))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Email already registered");

    Ok(())
}

#[tokio::test]
async fn fails_for_missing_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let dto = CreateUserDto {
        password: None,
        ..new_user("finn@first-order.mil")
    };

    let result = create_user(State(test.state()), Ok(Json(dto))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: password");

    Ok(())
}
